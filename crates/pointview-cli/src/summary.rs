use console::Style;
use pointview_core::dataset::PointDataset;
use pointview_core::scene::{Scene, ScreenRect};
use pointview_core::view::ViewState;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    primary: Style,
    secondary: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            primary: Style::new().green(),
            secondary: Style::new().red(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_scene_summary(
    dataset: &PointDataset,
    state: &ViewState,
    scene: &Scene,
    viewport: &ScreenRect,
) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Pointview Scene"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Points"),
        s.value.apply_to(dataset.len())
    );
    if let Some((min, max)) = dataset.bounds() {
        println!(
            "  {:<14}{}",
            s.label.apply_to("Bounds"),
            s.value.apply_to(format!(
                "x {}..{}, y {}..{}",
                min[0], max[0], min[1], max[1]
            ))
        );
    }
    println!(
        "  {:<14}{}",
        s.label.apply_to("Point size"),
        s.value.apply_to(format!("{:.1}", state.point_size()))
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!("{}x{}", viewport.size[0], viewport.size[1]))
    );

    match state.hovered() {
        Some(i) => println!(
            "  {:<14}{} {}",
            s.label.apply_to("Hovered"),
            s.value.apply_to(format!("#{i}")),
            s.path.apply_to(state.image_src().unwrap_or_default())
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Hovered"),
            s.disabled.apply_to("none")
        ),
    }

    match state.thumbnail() {
        Some(t) => println!(
            "  {:<14}{}",
            s.label.apply_to("Thumbnail"),
            s.value.apply_to(format!("at ({}, {})", t.position[0], t.position[1]))
        ),
        None => println!(
            "  {:<14}{}",
            s.label.apply_to("Thumbnail"),
            s.disabled.apply_to("hidden")
        ),
    }

    println!();
    println!(
        "  {}",
        s.header.apply_to(format!(
            "{:<4}{:>8}{:>8}{:>7}  {:<9}{:<18}{}",
            "#", "x", "y", "label", "color", "scale", "screen"
        ))
    );

    let projected = scene.project(viewport);
    for p in &scene.points {
        let label = dataset.labels()[p.index];
        let color_style = if label.is_primary() {
            &s.primary
        } else {
            &s.secondary
        };
        let screen = projected
            .iter()
            .find(|pp| pp.index == p.index)
            .map(|pp| format!("({:.1}, {:.1}) r={:.2}", pp.center[0], pp.center[1], pp.radius))
            .unwrap_or_else(|| "clipped".to_string());
        let marker = if p.hovered { "*" } else { " " };

        println!(
            "  {:<4}{:>8.1}{:>8.1}{:>7}  {:<9}{:<18}{}",
            format!("{}{marker}", p.index),
            p.position[0],
            p.position[1],
            label,
            color_style.apply_to(p.color),
            format!("({:.1}, {:.1}, {:.0})", p.scale[0], p.scale[1], p.scale[2]),
            screen
        );
    }
    println!();
}
