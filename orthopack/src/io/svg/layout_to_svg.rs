use crate::entities::Layout;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

/// Draws `layout` as an SVG document.
/// The origin of the container is drawn in the bottom-left corner.
pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let container = layout.container;
    let (c_width, c_height) = (container.width as f32, container.height as f32);
    let min_dim = f32::min(c_width, c_height);

    let margin = 0.05 * f32::max(c_width, c_height);
    let font_size = min_dim * 0.025;

    let theme = &options.theme;
    let stroke_width = min_dim * 0.001 * theme.stroke_width_multiplier;

    // flips the y-axis, svg has its origin in the top-left corner
    let to_svg_y = |y_max: u64| c_height - y_max as f32;

    let label = {
        //print some information above the left top of the container
        let label_content = format!(
            "width: {} | height: {} | value: {} | items: {} | density: {:.3}% | {}",
            container.width,
            container.height,
            layout.value(),
            layout.n_placed(),
            layout.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    let container_group = Group::new().set("id", "container").add(
        Rectangle::new()
            .set("x", 0.0)
            .set("y", 0.0)
            .set("width", c_width)
            .set("height", c_height)
            .set("fill", format!("{}", theme.container_fill))
            .set("stroke", "black")
            .set("stroke-width", 2.0 * stroke_width)
            .add(Title::new(format!(
                "container, width: {}, height: {}",
                container.width, container.height
            ))),
    );

    let max_value = layout
        .placed_items()
        .iter()
        .map(|pi| pi.value)
        .fold(0.0, f64::max);

    let mut items_group = Group::new().set("id", "items");
    for pi in layout.placed_items() {
        //more valuable items are drawn darker
        let fraction = match max_value > 0.0 {
            true => 1.4 - 0.4 * (pi.value / max_value) as f32,
            false => 1.0,
        };
        let fill = svg_util::change_brightness(theme.item_fill, fraction);
        let (x, y) = (pi.x() as f32, to_svg_y(pi.rect.y_max));
        let (w, h) = (pi.width() as f32, pi.height() as f32);

        let mut item_group = Group::new().set("id", format!("item_{}", pi.item_id)).add(
            Rectangle::new()
                .set("x", x)
                .set("y", y)
                .set("width", w)
                .set("height", h)
                .set("fill", format!("{fill}"))
                .set("fill-opacity", "0.8")
                .set("stroke", format!("{}", theme.item_stroke))
                .set("stroke-width", stroke_width)
                .add(Title::new(format!(
                    "item, id: {}, pos: ({}, {}), dims: {}x{}, value: {}",
                    pi.item_id,
                    pi.x(),
                    pi.y(),
                    pi.width(),
                    pi.height(),
                    pi.value
                ))),
        );

        if options.item_labels {
            let label_size = f32::min(font_size, 0.5 * f32::min(w, h));
            item_group = item_group.add(
                Text::new(format!("{}", pi.item_id))
                    .set("x", x + 0.5 * w)
                    .set("y", y + 0.5 * h)
                    .set("font-size", label_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "central")
                    .set("fill", format!("{}", theme.label_color)),
            );
        }
        items_group = items_group.add(item_group);
    }

    let vbox = (
        -margin,
        -margin - font_size,
        c_width + 2.0 * margin,
        c_height + 2.0 * margin + font_size,
    );

    Document::new()
        .set("viewBox", vbox)
        .add(container_group)
        .add(items_group)
        .add(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Container, Instance, Item};
    use crate::placement::place;
    use crate::io::svg::svg_util::SvgLayoutTheme;

    #[test]
    fn every_placed_item_is_drawn() {
        let items = vec![Item::new(0, 6, 4, 0.0), Item::new(1, 4, 6, 0.0), Item::new(2, 5, 5, 0.0)];
        let instance = Instance::try_new(
            "svg",
            Container {
                width: 10,
                height: 10,
            },
            items,
        )
        .unwrap();
        let (_, layout) = place(&instance, &[0, 1, 2]);
        let svg = layout_to_svg(&layout, SvgDrawOptions::default(), "svg").to_string();

        for id in 0..3 {
            assert!(svg.contains(&format!("id=\"item_{id}\"")));
        }
        assert!(svg.contains("value: 73"));
    }

    #[test]
    fn gray_theme_without_labels() {
        let items = vec![Item::new(0, 2, 2, 0.0)];
        let instance = Instance::try_new("gray", Container { width: 4, height: 4 }, items).unwrap();
        let (_, layout) = place(&instance, &[0]);
        let options = SvgDrawOptions {
            theme: SvgLayoutTheme::GRAY,
            item_labels: false,
        };
        let svg = layout_to_svg(&layout, options, "gray").to_string();

        assert!(svg.contains("#D3D3D3"));
        assert!(!svg.contains("text-anchor"));
    }
}
