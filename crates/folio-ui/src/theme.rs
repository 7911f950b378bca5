//! Conversions between preview types and egui

use egui::Color32;

use crate::preview::PreviewTarget;
use crate::shell::FrameRect;

pub fn accent(target: &PreviewTarget) -> Color32 {
    let [r, g, b] = target.accent;
    Color32::from_rgb(r, g, b)
}

/// egui points map 1:1 to CSS pixels at the default zoom
pub fn frame_rect(rect: egui::Rect) -> FrameRect {
    FrameRect {
        x: rect.min.x,
        y: rect.min.y,
        width: rect.width(),
        height: rect.height(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_rect_from_egui_rect() {
        let rect = egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(300.0, 200.0));
        assert_eq!(
            frame_rect(rect),
            FrameRect {
                x: 10.0,
                y: 20.0,
                width: 300.0,
                height: 200.0,
            }
        );
    }
}
