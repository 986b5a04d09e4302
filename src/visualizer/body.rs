//! Body rendering: ears, head, pattern overlay, muzzle.

/// main / shadow / highlight colors for a body color value
fn palette(color: &str) -> (&'static str, &'static str, &'static str) {
    match color {
        "brown" => ("#8B4513", "#5D2E0C", "#A0522D"),
        "tan" => ("#D2B48C", "#B8956E", "#E8D4B8"),
        "beige" => ("#F5F5DC", "#D4D4B8", "#FFFFF0"),
        "gray" => ("#808080", "#5A5A5A", "#A0A0A0"),
        "golden" => ("#FFD700", "#B8860B", "#FFEC8B"),
        "silver" => ("#C0C0C0", "#909090", "#E8E8E8"),
        "copper" => ("#B87333", "#8B5A2B", "#D4A574"),
        "bronze" => ("#CD7F32", "#8B5A2B", "#DAA06D"),
        "blue" => ("#4169E1", "#2E4A9E", "#6B8BF5"),
        "purple" => ("#9370DB", "#6A4FA0", "#B19CD9"),
        "green" => ("#32CD32", "#228B22", "#7CFC00"),
        "pink" => ("#FF69B4", "#DB4D91", "#FFB6C1"),
        "rainbow" => ("url(#rainbow-body)", "#9400D3", "#FFD700"),
        "galaxy" => ("url(#galaxy-body)", "#1A0033", "#E6E6FA"),
        "holographic" => ("url(#holo-body)", "#4B0082", "#FFFFFF"),
        "crystal" => ("#E0FFFF", "#87CEEB", "#FFFFFF"),
        _ => ("#8B4513", "#5D2E0C", "#A0522D"),
    }
}

pub fn body(color: &str, pattern_value: &str, w: u32, h: u32, seed: u32) -> String {
    let cx = (w / 2) as i64;
    let cy = (h / 2) as i64;
    let (main, _shadow, highlight) = palette(color);
    let mut parts: Vec<String> = Vec::new();

    // Ears
    for dx in [-85i64, 85] {
        parts.push(format!(
            r##"<ellipse cx="{}" cy="{}" rx="45" ry="50" fill="{}" filter="url(#shadow)"/>"##,
            cx + dx,
            cy - 60,
            main
        ));
        parts.push(format!(
            r##"<ellipse cx="{}" cy="{}" rx="30" ry="35" fill="#FFB6C1"/>"##,
            cx + dx,
            cy - 60
        ));
        parts.push(format!(
            r##"<ellipse cx="{}" cy="{}" rx="18" ry="22" fill="#FF9999"/>"##,
            cx + dx,
            cy - 55
        ));
    }

    // Head
    parts.push(format!(
        r##"<ellipse cx="{}" cy="{}" rx="110" ry="115" fill="{}" filter="url(#shadow)"/>"##,
        cx, cy, main
    ));
    parts.push(format!(
        r##"<ellipse cx="{}" cy="{}" rx="50" ry="30" fill="{}" opacity="0.3"/>"##,
        cx - 20,
        cy - 60,
        highlight
    ));

    // Pattern overlay, clipped to the head
    if pattern_value != "solid" && pattern_value != "none" {
        parts.push(format!(
            r##"<g clip-path="url(#head-clip)">{}</g>"##,
            pattern(pattern_value, cx, cy, seed)
        ));
    }

    // Muzzle
    parts.push(format!(
        r##"<ellipse cx="{}" cy="{}" rx="70" ry="60" fill="#FFDAB9"/>"##,
        cx,
        cy + 35
    ));
    parts.push(format!(
        r##"<ellipse cx="{}" cy="{}" rx="55" ry="40" fill="#DEB887" opacity="0.3"/>"##,
        cx,
        cy + 50
    ));

    parts.join("\n")
}

fn pattern(p: &str, cx: i64, cy: i64, seed: u32) -> String {
    let seed = seed as u64;
    match p {
        "spots" => (0..10u64)
            .map(|i| {
                format!(
                    r##"<circle cx="{}" cy="{}" r="12" fill="#000" opacity="0.12"/>"##,
                    cx + ((seed * i * 7) % 180) as i64 - 90,
                    cy + ((seed * i * 11) % 180) as i64 - 90
                )
            })
            .collect(),
        "stripes" => (0..6i64)
            .map(|i| {
                format!(
                    r##"<rect x="{}" y="{}" width="220" height="12" fill="#000" opacity="0.08" transform="rotate(-15 {} {})"/>"##,
                    cx - 110,
                    cy - 100 + i * 35,
                    cx,
                    cy
                )
            })
            .collect(),
        "stars" => (0..8u64)
            .map(|i| {
                format!(
                    r##"<text x="{}" y="{}" font-size="18" fill="#FFD700" opacity="0.5">★</text>"##,
                    cx + ((seed * i * 13) % 160) as i64 - 80,
                    cy + ((seed * i * 17) % 160) as i64 - 80
                )
            })
            .collect(),
        "hearts" => (0..7u64)
            .map(|i| {
                format!(
                    r##"<text x="{}" y="{}" font-size="16" fill="#FF69B4" opacity="0.4">♥</text>"##,
                    cx + ((seed * i * 19) % 140) as i64 - 70,
                    cy + ((seed * i * 23) % 140) as i64 - 70
                )
            })
            .collect(),
        "diamonds" => (0..8u64)
            .map(|i| {
                format!(
                    r##"<text x="{}" y="{}" font-size="18" fill="#00CED1" opacity="0.35">◆</text>"##,
                    cx + ((seed * i * 11) % 150) as i64 - 75,
                    cy + ((seed * i * 13) % 150) as i64 - 75
                )
            })
            .collect(),
        "swirls" => (0..4i64)
            .map(|i| {
                format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="#000" stroke-width="2" opacity="0.08" stroke-dasharray="15,10"/>"##,
                    cx,
                    cy,
                    100 - i * 25
                )
            })
            .collect(),
        "gradient" => format!(
            r##"<ellipse cx="{}" cy="{}" rx="110" ry="115" fill="url(#sky-gradient)" opacity="0.25"/>"##,
            cx, cy
        ),
        "nebula" => format!(
            r##"<ellipse cx="{}" cy="{}" rx="45" ry="35" fill="#FF00FF" opacity="0.12"/><ellipse cx="{}" cy="{}" rx="40" ry="30" fill="#00FFFF" opacity="0.12"/>"##,
            cx - 25,
            cy - 15,
            cx + 30,
            cy + 25
        ),
        "lightning" => format!(
            r##"<path d="M{} {} L{} {} L{} {} L{} {}" stroke="#FFD700" stroke-width="3" fill="none" opacity="0.5"/>"##,
            cx - 15,
            cy - 70,
            cx + 15,
            cy - 10,
            cx,
            cy - 10,
            cx + 30,
            cy + 50
        ),
        "flames" => format!(
            r##"<ellipse cx="{}" cy="{}" rx="45" ry="25" fill="#FF4500" opacity="0.2"/><ellipse cx="{}" cy="{}" rx="35" ry="20" fill="#FF6600" opacity="0.15"/>"##,
            cx,
            cy + 70,
            cx,
            cy + 60
        ),
        "fractals" | "aurora" | "quantum" | "cosmic_dust" | "void" => format!(
            r##"<ellipse cx="{}" cy="{}" rx="100" ry="105" fill="url(#aurora-gradient)" opacity="0.2"/>"##,
            cx, cy
        ),
        _ => String::new(),
    }
}
