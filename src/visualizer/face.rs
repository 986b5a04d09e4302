//! Face rendering keyed on the expression trait.

pub fn face(expr: &str, w: u32, h: u32) -> String {
    let cx = (w / 2) as i64;
    let cy = (h / 2) as i64;
    let ey = cy - 15;
    let spacing = 38;
    let lx = cx - spacing;
    let rx = cx + spacing;

    let mut parts = eyes(expr, lx, rx, ey);
    parts.push(nose(cx, cy));
    parts.extend(mouth(expr, cx, cy));
    parts.extend(brows(expr, lx, rx, ey));

    parts.join("\n")
}

fn eyes(expr: &str, lx: i64, rx: i64, ey: i64) -> Vec<String> {
    let mut p = Vec::new();

    // Eye shadows
    for x in [lx, rx] {
        p.push(format!(
            r##"<ellipse cx="{}" cy="{}" rx="22" ry="24" fill="#000" opacity="0.08"/>"##,
            x, ey
        ));
    }

    match expr {
        "sleepy" | "zen" => {
            for x in [lx, rx] {
                p.push(format!(
                    r##"<ellipse cx="{}" cy="{}" rx="18" ry="8" fill="white"/>"##,
                    x, ey
                ));
                p.push(format!(
                    r##"<ellipse cx="{}" cy="{}" rx="10" ry="5" fill="#3D2314"/>"##,
                    x,
                    ey + 2
                ));
            }
        }
        "winking" => {
            p.push(format!(
                r##"<ellipse cx="{}" cy="{}" rx="18" ry="20" fill="white"/>"##,
                lx, ey
            ));
            p.push(format!(
                r##"<circle cx="{}" cy="{}" r="12" fill="#3D2314"/>"##,
                lx, ey
            ));
            p.push(format!(r##"<circle cx="{}" cy="{}" r="6" fill="#000"/>"##, lx, ey));
            p.push(format!(
                r##"<circle cx="{}" cy="{}" r="4" fill="white"/>"##,
                lx + 4,
                ey - 4
            ));
            p.push(format!(
                r##"<path d="M{} {} Q{} {} {} {}" stroke="#3D2314" stroke-width="3" fill="none"/>"##,
                rx - 15,
                ey,
                rx,
                ey + 8,
                rx + 15,
                ey
            ));
        }
        "surprised" | "excited" => {
            for x in [lx, rx] {
                p.push(format!(
                    r##"<ellipse cx="{}" cy="{}" rx="20" ry="24" fill="white"/>"##,
                    x, ey
                ));
                p.push(format!(
                    r##"<circle cx="{}" cy="{}" r="14" fill="#3D2314"/>"##,
                    x, ey
                ));
                p.push(format!(r##"<circle cx="{}" cy="{}" r="8" fill="#000"/>"##, x, ey));
                p.push(format!(
                    r##"<circle cx="{}" cy="{}" r="5" fill="white"/>"##,
                    x + 5,
                    ey - 5
                ));
            }
        }
        "enlightened" | "cosmic" | "divine" | "legendary" => {
            let glow_color = if expr == "legendary" { "#FF4500" } else { "#E6E6FA" };
            let iris_color = if expr == "legendary" { "#FFD700" } else { "#9370DB" };
            for x in [lx, rx] {
                p.push(format!(
                    r##"<ellipse cx="{}" cy="{}" rx="18" ry="20" fill="{}" filter="url(#glow)"/>"##,
                    x, ey, glow_color
                ));
                p.push(format!(
                    r##"<circle cx="{}" cy="{}" r="10" fill="{}"/>"##,
                    x, ey, iris_color
                ));
                p.push(format!(r##"<circle cx="{}" cy="{}" r="4" fill="#FFF"/>"##, x, ey));
            }
        }
        _ => {
            for x in [lx, rx] {
                p.push(format!(
                    r##"<ellipse cx="{}" cy="{}" rx="18" ry="20" fill="white"/>"##,
                    x, ey
                ));
                p.push(format!(
                    r##"<circle cx="{}" cy="{}" r="12" fill="#3D2314"/>"##,
                    x, ey
                ));
                p.push(format!(r##"<circle cx="{}" cy="{}" r="6" fill="#000"/>"##, x, ey));
                p.push(format!(
                    r##"<circle cx="{}" cy="{}" r="4" fill="white"/>"##,
                    x + 4,
                    ey - 4
                ));
            }
        }
    }

    p
}

fn nose(cx: i64, cy: i64) -> String {
    let ny = cy + 30;
    format!(
        r##"<g>
            <ellipse cx="{cx}" cy="{ny}" rx="25" ry="18" fill="#8B4513"/>
            <ellipse cx="{cx}" cy="{ny}" rx="22" ry="15" fill="#A0522D"/>
            <ellipse cx="{nl}" cy="{ny}" rx="5" ry="7" fill="#5D2E0C"/>
            <ellipse cx="{nr}" cy="{ny}" rx="5" ry="7" fill="#5D2E0C"/>
        </g>"##,
        cx = cx,
        ny = ny,
        nl = cx - 8,
        nr = cx + 8
    )
}

fn mouth(expr: &str, cx: i64, cy: i64) -> Vec<String> {
    let my = cy + 60;
    let mut p = Vec::new();

    match expr {
        "happy" | "excited" => p.push(format!(
            r##"<path d="M{} {} Q{} {} {} {}" stroke="#5D2E0C" stroke-width="4" fill="none"/>"##,
            cx - 30,
            my,
            cx,
            my + 25,
            cx + 30,
            my
        )),
        "laughing" => {
            p.push(format!(
                r##"<ellipse cx="{}" cy="{}" rx="28" ry="18" fill="#8B0000"/>"##,
                cx,
                my + 5
            ));
            p.push(format!(
                r##"<ellipse cx="{}" cy="{}" rx="18" ry="7" fill="#FF6B6B"/>"##,
                cx,
                my + 12
            ));
        }
        "surprised" => p.push(format!(
            r##"<ellipse cx="{}" cy="{}" rx="16" ry="22" fill="#8B0000"/>"##,
            cx,
            my + 5
        )),
        "mischievous" | "cool" => p.push(format!(
            r##"<path d="M{} {} Q{} {} {} {}" stroke="#5D2E0C" stroke-width="3" fill="none"/>"##,
            cx - 22,
            my + 5,
            cx,
            my,
            cx + 25,
            my - 8
        )),
        "wise" | "zen" | "enlightened" | "cosmic" | "divine" => p.push(format!(
            r##"<path d="M{} {} Q{} {} {} {}" stroke="#5D2E0C" stroke-width="2" fill="none"/>"##,
            cx - 22,
            my,
            cx,
            my + 8,
            cx + 22,
            my
        )),
        _ => p.push(format!(
            r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#5D2E0C" stroke-width="2"/>"##,
            cx - 18,
            my,
            cx + 18,
            my
        )),
    }

    p
}

fn brows(expr: &str, lx: i64, rx: i64, ey: i64) -> Vec<String> {
    let by = ey - 30;
    let mut p = Vec::new();

    match expr {
        "surprised" | "excited" => {
            for x in [lx, rx] {
                p.push(format!(
                    r##"<path d="M{} {} Q{} {} {} {}" stroke="#5D2E0C" stroke-width="3" fill="none"/>"##,
                    x - 15,
                    by + 5,
                    x,
                    by - 5,
                    x + 15,
                    by + 5
                ));
            }
        }
        "mischievous" | "cool" => {
            p.push(format!(
                r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#5D2E0C" stroke-width="3"/>"##,
                lx - 12,
                by,
                lx + 12,
                by + 6
            ));
            p.push(format!(
                r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#5D2E0C" stroke-width="3"/>"##,
                rx - 12,
                by + 6,
                rx + 12,
                by
            ));
        }
        "wise" | "zen" => {
            for x in [lx, rx] {
                p.push(format!(
                    r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#5D2E0C" stroke-width="2"/>"##,
                    x - 12,
                    by + 3,
                    x + 12,
                    by + 3
                ));
            }
        }
        _ => {}
    }

    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_winking_has_one_open_eye() {
        let svg = face("winking", 400, 400);
        // one white eyeball plus one closed-lid path
        assert_eq!(svg.matches(r##"rx="18" ry="20" fill="white""##).count(), 1);
        assert!(svg.contains("Q238 193 253 185"));
    }

    #[test]
    fn test_legendary_eyes_glow() {
        let svg = face("legendary", 400, 400);
        assert!(svg.contains("#FF4500"));
        assert!(svg.contains(r##"filter="url(#glow)""##));
    }

    #[test]
    fn test_default_expression_has_neutral_mouth() {
        let svg = face("unknown", 400, 400);
        assert!(svg.contains("<line"));
        assert!(svg.contains("stroke-width=\"2\""));
    }
}
