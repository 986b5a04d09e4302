//! Accessory overlays: hats, glasses, chains, wings, and friends.

pub fn accessory(acc: &str, w: u32, h: u32) -> String {
    let cx = (w / 2) as i64;
    let cy = (h / 2) as i64;

    match acc {
        "simple_hat" => format!(
            r##"<rect x="{}" y="{}" width="90" height="18" rx="3" fill="#8B0000"/><rect x="{}" y="{}" width="110" height="8" fill="#8B0000"/>"##,
            cx - 45,
            cy - 145,
            cx - 55,
            cy - 130
        ),
        "bandana" => format!(
            r##"<path d="M{} {} Q{} {} {} {}" stroke="#E74C3C" stroke-width="12" fill="none"/><polygon points="{},{} {},{} {},{}" fill="#E74C3C"/>"##,
            cx - 90,
            cy - 80,
            cx,
            cy - 110,
            cx + 90,
            cy - 80,
            cx - 95,
            cy - 75,
            cx - 110,
            cy - 40,
            cx - 85,
            cy - 50
        ),
        "bow" => format!(
            r##"<ellipse cx="{bx}" cy="{by}" rx="20" ry="15" fill="#FF69B4"/><ellipse cx="{bx}" cy="{by}" rx="8" ry="8" fill="#FF1493"/><polygon points="{bx},{} {},{by} {bx},{}" fill="#FF69B4"/>"##,
            cy - 85,
            cx - 55,
            cy - 55,
            bx = cx - 70,
            by = cy - 70
        ),
        "sunglasses" => format!(
            r##"<rect x="{}" y="{y}" width="38" height="28" rx="4" fill="#000" opacity="0.85"/><rect x="{}" y="{y}" width="38" height="28" rx="4" fill="#000" opacity="0.85"/><line x1="{}" y1="{b}" x2="{}" y2="{b}" stroke="#000" stroke-width="3"/><line x1="{}" y1="{b}" x2="{}" y2="{}" stroke="#000" stroke-width="2"/><line x1="{}" y1="{b}" x2="{}" y2="{}" stroke="#000" stroke-width="2"/>"##,
            cx - 58,
            cx + 20,
            cx - 20,
            cx + 20,
            cx - 58,
            cx - 80,
            cy - 20,
            cx + 58,
            cx + 80,
            cy - 20,
            y = cy - 25,
            b = cy - 11
        ),
        "crown" => format!(
            r##"<polygon points="{l},{base} {},{tip} {cx},{mid} {},{tip} {r},{base}" fill="#FFD700" stroke="#DAA520" stroke-width="2"/><rect x="{l}" y="{base}" width="70" height="12" fill="#FFD700" stroke="#DAA520" stroke-width="2"/>"##,
            cx - 20,
            cx + 20,
            l = cx - 35,
            r = cx + 35,
            base = cy - 130,
            tip = cy - 155,
            mid = cy - 135,
            cx = cx
        ),
        "headphones" => format!(
            r##"<path d="M{} {yb} Q{} {yt} {} {yh} Q{} {yt} {} {yb}" stroke="#333" stroke-width="8" fill="none"/><rect x="{}" y="{yc}" width="25" height="40" rx="5" fill="#333"/><rect x="{}" y="{yc}" width="25" height="40" rx="5" fill="#333"/>"##,
            cx - 75,
            cx - 75,
            cx,
            cx + 75,
            cx + 75,
            cx - 85,
            cx + 60,
            yb = cy - 30,
            yt = cy - 100,
            yh = cy - 110,
            yc = cy - 45
        ),
        "monocle" => format!(
            r##"<circle cx="{}" cy="{y}" r="22" fill="none" stroke="#DAA520" stroke-width="3"/><line x1="{}" y1="{y}" x2="{}" y2="{}" stroke="#DAA520" stroke-width="2"/>"##,
            cx + 38,
            cx + 60,
            cx + 90,
            cy + 40,
            y = cy - 15
        ),
        "halo" => format!(
            r##"<ellipse cx="{}" cy="{}" rx="55" ry="12" fill="none" stroke="#FFD700" stroke-width="6" opacity="0.85" filter="url(#glow)"/>"##,
            cx,
            cy - 150
        ),
        "horns" => format!(
            r##"<path d="M{} {} Q{} {} {} {}" stroke="#8B0000" stroke-width="12" fill="none" stroke-linecap="round"/><path d="M{} {} Q{} {} {} {}" stroke="#8B0000" stroke-width="12" fill="none" stroke-linecap="round"/>"##,
            cx - 60,
            cy - 90,
            cx - 80,
            cy - 150,
            cx - 50,
            cy - 160,
            cx + 60,
            cy - 90,
            cx + 80,
            cy - 150,
            cx + 50,
            cy - 160
        ),
        "wizard_hat" => format!(
            r##"<polygon points="{cx},{} {},{brim} {},{brim}" fill="#4B0082"/><ellipse cx="{cx}" cy="{brim}" rx="65" ry="12" fill="#4B0082"/><text x="{cx}" y="{}" font-size="20" fill="#FFD700" text-anchor="middle">★</text>"##,
            cy - 190,
            cx - 55,
            cx + 55,
            cy - 145,
            cx = cx,
            brim = cy - 115
        ),
        "golden_crown" => format!(
            r##"<polygon points="{},{a} {},{t} {},{b} {},{t} {},{b} {},{t} {},{base} {},{base}" fill="#FFD700" stroke="#B8860B" stroke-width="3"/><circle cx="{cx}" cy="{}" r="8" fill="#E74C3C"/><circle cx="{}" cy="{c}" r="5" fill="#3498DB"/><circle cx="{}" cy="{c}" r="5" fill="#2ECC71"/>"##,
            cx - 45,
            cx - 30,
            cx - 10,
            cx + 10,
            cx + 30,
            cx + 45,
            cx + 45,
            cx - 45,
            cy - 155,
            cx - 25,
            cx + 25,
            a = cy - 130,
            t = cy - 165,
            b = cy - 140,
            base = cy - 115,
            c = cy - 145,
            cx = cx
        ),
        "diamond_chain" => format!(
            r##"<path d="M{} {y} Q{cx} {} {} {y}" stroke="#C0C0C0" stroke-width="4" fill="none"/><polygon points="{cx},{} {},{m} {cx},{} {},{m}" fill="#00CED1" stroke="#87CEEB" stroke-width="2"/>"##,
            cx - 80,
            cy + 100,
            cx + 80,
            cy + 85,
            cx + 12,
            cy + 115,
            cx - 12,
            y = cy + 80,
            m = cy + 100,
            cx = cx
        ),
        "jetpack" => format!(
            r##"<rect x="{}" y="{yt}" width="20" height="50" rx="5" fill="#555"/><rect x="{}" y="{yt}" width="20" height="50" rx="5" fill="#555"/><ellipse cx="{}" cy="{yf}" rx="8" ry="15" fill="#FF4500" opacity="0.8"/><ellipse cx="{}" cy="{yf}" rx="8" ry="15" fill="#FF4500" opacity="0.8"/>"##,
            cx - 50,
            cx + 30,
            cx - 40,
            cx + 40,
            yt = cy + 60,
            yf = cy + 120
        ),
        "wings" => format!(
            r##"<path d="M{} {cy} Q{} {} {} {} Q{} {} {} {}" fill="#E6E6FA" opacity="0.8"/><path d="M{} {cy} Q{} {} {} {} Q{} {} {} {}" fill="#E6E6FA" opacity="0.8"/>"##,
            cx - 100,
            cx - 150,
            cy - 80,
            cx - 180,
            cy + 20,
            cx - 140,
            cy + 10,
            cx - 100,
            cy + 30,
            cx + 100,
            cx + 150,
            cy - 80,
            cx + 180,
            cy + 20,
            cx + 140,
            cy + 10,
            cx + 100,
            cy + 30,
            cy = cy
        ),
        "laser_eyes" => format!(
            r##"<line x1="{}" y1="{y}" x2="{}" y2="{t}" stroke="#FF0000" stroke-width="4" opacity="0.7"/><line x1="{}" y1="{y}" x2="{}" y2="{t}" stroke="#FF0000" stroke-width="4" opacity="0.7"/>"##,
            cx - 38,
            cx - 150,
            cx + 38,
            cx + 150,
            y = cy - 15,
            t = cy + 50
        ),
        _ => String::new(),
    }
}
