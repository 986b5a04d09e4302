//! Special effect layers behind and in front of the monkey.

/// Effects drawn behind the body
pub fn back(sp: &str, w: u32, h: u32) -> String {
    let cx = w / 2;
    let cy = h / 2;

    match sp {
        "aura" => format!(
            r##"<circle cx="{cx}" cy="{cy}" r="160" fill="none" stroke="#9400D3" stroke-width="4" opacity="0.3"/><circle cx="{cx}" cy="{cy}" r="175" fill="none" stroke="#4B0082" stroke-width="2" opacity="0.2"/>"##,
            cx = cx,
            cy = cy
        ),
        "energy" => format!(
            r##"<circle cx="{}" cy="{}" r="165" fill="none" stroke="#00FFFF" stroke-width="3" opacity="0.25" stroke-dasharray="20,10"/>"##,
            cx, cy
        ),
        "transcendent" | "godlike" | "mythical" => format!(
            r##"<circle cx="{}" cy="{}" r="180" fill="url(#multiverse-gradient)" opacity="0.15"/>"##,
            cx, cy
        ),
        _ => String::new(),
    }
}

/// Effects drawn over the body
pub fn front(sp: &str, w: u32, h: u32, seed: u32) -> String {
    let cx = (w / 2) as i64;
    let cy = (h / 2) as i64;
    let seed = seed as u64;

    match sp {
        "sparkles" => {
            let positions = [
                (cx - 90, cy - 90),
                (cx + 90, cy - 90),
                (cx - 90, cy + 90),
                (cx + 90, cy + 90),
                (cx, cy - 130),
            ];
            positions
                .iter()
                .map(|(x, y)| {
                    format!(
                        r##"<text x="{}" y="{}" font-size="24" fill="#FFD700">✦</text>"##,
                        x, y
                    )
                })
                .collect()
        }
        "glow" => format!(
            r##"<circle cx="{}" cy="{}" r="135" fill="none" stroke="#FFD700" stroke-width="6" opacity="0.25"/>"##,
            cx, cy
        ),
        "shadow" => format!(
            r##"<ellipse cx="{}" cy="{}" rx="100" ry="20" fill="#000" opacity="0.2"/>"##,
            cx,
            cy + 140
        ),
        "particles" => (0..12u64)
            .map(|i| {
                format!(
                    r##"<circle cx="{}" cy="{}" r="3" fill="#FFD700" opacity="0.6"/>"##,
                    cx + ((seed * i * 13) % 200) as i64 - 100,
                    cy + ((seed * i * 17) % 200) as i64 - 100
                )
            })
            .collect(),
        "transcendent" => format!(
            r##"<circle cx="{}" cy="{}" r="145" fill="none" stroke="#FFD700" stroke-width="4" opacity="0.4" filter="url(#glow)"/>"##,
            cx, cy
        ),
        "godlike" => format!(
            r##"<circle cx="{cx}" cy="{cy}" r="150" fill="none" stroke="#FFF" stroke-width="3" opacity="0.5" filter="url(#glow)"/><text x="{cx}" y="{}" font-size="36" fill="#FFD700" text-anchor="middle" filter="url(#glow)">♔</text>"##,
            cy - 170,
            cx = cx,
            cy = cy
        ),
        "mythical" => format!(
            r##"<circle cx="{cx}" cy="{cy}" r="155" fill="none" stroke="#FF00FF" stroke-width="3" opacity="0.4" filter="url(#glow)"/><circle cx="{cx}" cy="{cy}" r="165" fill="none" stroke="#00FFFF" stroke-width="2" opacity="0.3"/>"##,
            cx = cx,
            cy = cy
        ),
        _ => String::new(),
    }
}
