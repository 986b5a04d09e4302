//! Background layers: solid fills, gradients, and seeded scene elements.

enum BackgroundKind {
    Solid(&'static str),
    Gradient(&'static str),
    Scene {
        base: &'static str,
        elements: &'static str,
    },
}

fn background_kind(bg: &str) -> BackgroundKind {
    match bg {
        "white" => BackgroundKind::Solid("#F8F9FA"),
        "blue_sky" => BackgroundKind::Gradient("sky-gradient"),
        "green_grass" => BackgroundKind::Gradient("grass-gradient"),
        "sunset" => BackgroundKind::Gradient("sunset-gradient"),
        "forest" => BackgroundKind::Scene {
            base: "#1A4D1A",
            elements: "trees",
        },
        "beach" => BackgroundKind::Scene {
            base: "#F0E68C",
            elements: "waves",
        },
        "mountains" => BackgroundKind::Scene {
            base: "#708090",
            elements: "peaks",
        },
        "city" => BackgroundKind::Scene {
            base: "#2C3E50",
            elements: "buildings",
        },
        "space" => BackgroundKind::Scene {
            base: "#0D1B2A",
            elements: "stars",
        },
        "underwater" => BackgroundKind::Scene {
            base: "#006994",
            elements: "bubbles",
        },
        "volcano" => BackgroundKind::Scene {
            base: "#1A0A00",
            elements: "lava",
        },
        "aurora" => BackgroundKind::Gradient("aurora-gradient"),
        "multiverse" => BackgroundKind::Gradient("multiverse-gradient"),
        "black_hole" => BackgroundKind::Scene {
            base: "#000000",
            elements: "vortex",
        },
        "dimension_rift" => BackgroundKind::Gradient("rift-gradient"),
        "heaven" => BackgroundKind::Gradient("heaven-gradient"),
        // Unknown backgrounds fall back to white
        _ => BackgroundKind::Solid("#F8F9FA"),
    }
}

pub fn background(bg: &str, w: u32, h: u32, seed: u32) -> String {
    match background_kind(bg) {
        BackgroundKind::Solid(color) => {
            format!(r##"<rect width="{}" height="{}" fill="{}"/>"##, w, h, color)
        }
        BackgroundKind::Gradient(id) => {
            format!(r##"<rect width="{}" height="{}" fill="url(#{})"/>"##, w, h, id)
        }
        BackgroundKind::Scene { base, elements } => {
            let mut parts = vec![format!(
                r##"<rect width="{}" height="{}" fill="{}"/>"##,
                w, h, base
            )];
            parts.push(scene_elements(elements, w, h, seed));
            parts.join("\n")
        }
    }
}

fn scene_elements(elem: &str, w: u32, h: u32, seed: u32) -> String {
    let w = w as u64;
    let h = h as u64;
    let seed = seed as u64;
    let mut parts: Vec<String> = Vec::new();

    match elem {
        "stars" => {
            for i in 0..40u64 {
                let x = (seed * (i + 1) * 7) % w;
                let y = (seed * (i + 1) * 13) % h;
                let r = 1 + i % 2;
                let opacity = (4 + i % 5) as f64 / 10.0;
                parts.push(format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="white" opacity="{}"/>"##,
                    x, y, r, opacity
                ));
            }
        }
        "trees" => {
            for i in 0..5u64 {
                let x = (40 + i * 80) as i64;
                let th = (50 + (seed * i) % 30) as i64;
                let ground = h as i64 - 20;
                parts.push(format!(
                    r##"<polygon points="{x},{g} {xl},{g} {x},{top}" fill="#0D3D0D" opacity="0.5"/>"##,
                    x = x,
                    g = ground,
                    xl = x - 20,
                    top = ground - th
                ));
                parts.push(format!(
                    r##"<polygon points="{x},{g} {xr},{g} {x},{top}" fill="#1A5C1A" opacity="0.5"/>"##,
                    x = x,
                    g = ground,
                    xr = x + 20,
                    top = ground - th
                ));
            }
        }
        "waves" => {
            for i in 0..3i64 {
                let y = h as i64 - 50 + i * 15;
                let opacity = (25 - i * 6) as f64 / 100.0;
                parts.push(format!(
                    r##"<path d="M0 {y} Q100 {crest} 200 {y} T400 {y}" fill="#4169E1" opacity="{op}"/>"##,
                    y = y,
                    crest = y - 12,
                    op = opacity
                ));
            }
        }
        "peaks" => {
            let h = h as i64;
            parts.push(format!(
                r##"<polygon points="50,{h} 150,{} 250,{h}" fill="#4A5568"/>"##,
                h - 140,
                h = h
            ));
            parts.push(format!(
                r##"<polygon points="180,{h} 280,{} 380,{h}" fill="#2D3748"/>"##,
                h - 180,
                h = h
            ));
            parts.push(format!(
                r##"<polygon points="145,{} 150,{} 155,{}" fill="white"/>"##,
                h - 130,
                h - 140,
                h - 130
            ));
            parts.push(format!(
                r##"<polygon points="275,{} 280,{} 285,{}" fill="white"/>"##,
                h - 170,
                h - 180,
                h - 170
            ));
        }
        "buildings" => {
            for i in 0..7u64 {
                let x = i * 60;
                let bh = 70 + (seed * (i + 1)) % 90;
                parts.push(format!(
                    r##"<rect x="{}" y="{}" width="50" height="{}" fill="#1A202C"/>"##,
                    x,
                    h as i64 - bh as i64,
                    bh
                ));
                let mut wy = 10;
                while wy < bh as i64 - 10 {
                    for wx in (8..42).step_by(14) {
                        if (seed + i + wy as u64 + wx as u64) % 3 != 0 {
                            parts.push(format!(
                                r##"<rect x="{}" y="{}" width="6" height="8" fill="#FFD700" opacity="0.6"/>"##,
                                x as i64 + wx as i64,
                                h as i64 - bh as i64 + wy
                            ));
                        }
                    }
                    wy += 18;
                }
            }
        }
        "bubbles" => {
            for i in 0..15u64 {
                let x = (seed * (i + 1) * 17) % w;
                let y = (seed * (i + 1) * 23) % h;
                let r = 4 + i % 8;
                parts.push(format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="white" opacity="0.25"/>"##,
                    x, y, r
                ));
            }
        }
        "lava" => {
            parts.push(format!(
                r##"<rect x="0" y="{}" width="{}" height="60" fill="#FF4500" opacity="0.6"/>"##,
                h as i64 - 60,
                w
            ));
            // Spread width stays positive for tiny renders
            let span = w.saturating_sub(60).max(1);
            for i in 0..6u64 {
                let x = 30 + (seed * i * 11) % span;
                parts.push(format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="#FF6600"/>"##,
                    x,
                    h as i64 - 25,
                    6 + i % 4
                ));
            }
        }
        "vortex" => {
            let cx = w / 2;
            let cy = h / 2;
            for i in 0..6i64 {
                let opacity = (10 + i * 5) as f64 / 100.0;
                parts.push(format!(
                    r##"<circle cx="{}" cy="{}" r="{}" fill="none" stroke="#4B0082" stroke-width="2" opacity="{}"/>"##,
                    cx,
                    cy,
                    160 - i * 25,
                    opacity
                ));
            }
            parts.push(format!(
                r##"<circle cx="{}" cy="{}" r="25" fill="#000"/>"##,
                cx, cy
            ));
        }
        _ => {}
    }

    parts.join("\n")
}
