use serde::{Deserialize, Serialize};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

use crate::entities::{Cutlist, Sheet};

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SvgDrawOptions {
    pub theme: SvgLayoutThemes,
    /// Writes the id (or label) of every piece on top of it
    pub draw_labels: bool,
}

#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize, Default)]
pub enum SvgLayoutThemes {
    #[default]
    EarthTones,
    Gray,
}

impl SvgLayoutThemes {
    pub fn theme(&self) -> SvgLayoutTheme {
        match self {
            SvgLayoutThemes::EarthTones => EARTH_TONES_THEME,
            SvgLayoutThemes::Gray => GRAY_THEME,
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub stock_fill: &'static str,
    pub piece_fill: &'static str,
    pub text_fill: &'static str,
}

pub static EARTH_TONES_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.0,
    stock_fill: "#CC824A",
    piece_fill: "#FFC879",
    text_fill: "#2D2D2D",
};

pub static GRAY_THEME: SvgLayoutTheme = SvgLayoutTheme {
    stroke_width_multiplier: 2.5,
    stock_fill: "#C3C3C3",
    piece_fill: "#8F8F8F",
    text_fill: "#000000",
};

/// Draws a single sheet with all the panels placed on it
pub fn sheet_to_svg(sheet: &Sheet, options: SvgDrawOptions) -> Document {
    let theme = options.theme.theme();
    let margin = f32::max(sheet.width, sheet.height) * 0.025;
    let stroke_width = f32::min(sheet.width, sheet.height) * 0.001 * theme.stroke_width_multiplier;

    let sheet_rect = rectangle(
        0.0,
        0.0,
        sheet.width,
        sheet.height,
        &[
            ("fill", theme.stock_fill),
            ("stroke", "black"),
            ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
        ],
    )
    .add(Title::new(format!(
        "sheet, {} x {}, usage: {:.3}",
        sheet.width,
        sheet.height,
        sheet.usage()
    )));

    let mut panels_group = Group::new().set("id", "panels");
    for pp in &sheet.placed {
        let title = Title::new(format!(
            "panel, id: {}, [x: {:.3}, y: {:.3}, w: {:.3}, h: {:.3}]",
            pp.id, pp.x, pp.y, pp.width, pp.height
        ));
        let mut group = Group::new().add(
            rectangle(
                pp.x,
                pp.y,
                pp.width,
                pp.height,
                &[
                    ("fill", theme.piece_fill),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", stroke_width)),
                    ("opacity", "0.9"),
                ],
            )
            .add(title),
        );
        if options.draw_labels {
            let font_size = f32::min(pp.width, pp.height) * 0.25;
            group = group.add(label(
                pp.label.as_deref().unwrap_or(&pp.id),
                pp.x + pp.width / 2.0,
                pp.y + pp.height / 2.0,
                font_size,
                theme.text_fill,
            ));
        }
        panels_group = panels_group.add(group);
    }

    Document::new()
        .set(
            "viewBox",
            (
                -margin,
                -margin,
                sheet.width + 2.0 * margin,
                sheet.height + 2.0 * margin,
            ),
        )
        .add(Group::new().set("id", "sheet").add(sheet_rect))
        .add(panels_group)
}

/// Draws every board of a cutlist as a horizontal bar, stacked from top to bottom
pub fn cutlist_to_svg(cutlist: &Cutlist, options: SvgDrawOptions) -> Document {
    let theme = options.theme.theme();
    let length = cutlist.stock_length();
    let board_height = length * 0.04;
    let spacing = board_height * 0.5;
    let margin = length * 0.025;
    let stroke_width = board_height * 0.01 * theme.stroke_width_multiplier;

    let mut boards_group = Group::new().set("id", "boards");
    for (i, board) in cutlist.boards().iter().enumerate() {
        let y = i as f32 * (board_height + spacing);
        let mut group = Group::new().set("id", format!("board_{i}")).add(
            rectangle(
                0.0,
                y,
                length,
                board_height,
                &[
                    ("fill", theme.stock_fill),
                    ("stroke", "black"),
                    ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
                ],
            )
            .add(Title::new(format!(
                "board {i}, waste: {:.3}",
                board.waste()
            ))),
        );
        for cut in board.cuts() {
            group = group.add(
                rectangle(
                    cut.offset,
                    y,
                    cut.length,
                    board_height,
                    &[
                        ("fill", theme.piece_fill),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{}", stroke_width)),
                    ],
                )
                .add(Title::new(format!(
                    "cut, id: {}, offset: {:.3}, length: {:.3}",
                    cut.id, cut.offset, cut.length
                ))),
            );
            if options.draw_labels {
                group = group.add(label(
                    &cut.id,
                    cut.offset + cut.length / 2.0,
                    y + board_height / 2.0,
                    board_height * 0.5,
                    theme.text_fill,
                ));
            }
        }
        boards_group = boards_group.add(group);
    }

    let n_boards = cutlist.n_boards() as f32;
    let height = f32::max(n_boards * board_height + (n_boards - 1.0) * spacing, board_height);

    Document::new()
        .set(
            "viewBox",
            (-margin, -margin, length + 2.0 * margin, height + 2.0 * margin),
        )
        .add(boards_group)
}

fn rectangle(x: f32, y: f32, width: f32, height: f32, params: &[(&str, &str)]) -> Rectangle {
    let mut rect = Rectangle::new()
        .set("x", x)
        .set("y", y)
        .set("width", width)
        .set("height", height);
    for (key, value) in params {
        rect = rect.set(*key, *value);
    }
    rect
}

fn label(content: &str, cx: f32, cy: f32, font_size: f32, fill: &str) -> Text {
    Text::new(content)
        .set("x", cx)
        .set("y", cy)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("fill", fill)
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CutRequirement, Panel, PlacedPanel, RequirementSet};
    use crate::linear::{Strategy, solve};

    #[test]
    fn sheet_svg_contains_every_panel() {
        let a = Panel::new(40.0, 20.0, "a");
        let b = Panel::new(40.0, 20.0, "b").with_label("B");
        let sheet = Sheet::new(
            96.0,
            48.0,
            vec![PlacedPanel::new(&a, 0.0, 0.0), PlacedPanel::new(&b, 0.0, 20.0)],
        );
        let options = SvgDrawOptions {
            draw_labels: true,
            ..SvgDrawOptions::default()
        };
        let svg = sheet_to_svg(&sheet, options).to_string();
        assert!(svg.contains("panel, id: a"));
        assert!(svg.contains("panel, id: b"));
        assert_eq!(svg.matches("<text").count(), 2);
    }

    #[test]
    fn cutlist_svg_draws_one_group_per_board() {
        let reqs = RequirementSet::from(vec![CutRequirement::new(60.0, 3, "rail")]);
        let cutlist = solve(&reqs, 96.0, 0.0, &Strategy::LengthFirst).unwrap();
        let svg = cutlist_to_svg(&cutlist, SvgDrawOptions::default()).to_string();
        assert_eq!(cutlist.n_boards(), 3);
        assert!(svg.contains("board_0"));
        assert!(svg.contains("board_2"));
        assert!(!svg.contains("board_3"));
    }
}
