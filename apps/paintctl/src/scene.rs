use dispatch_core::{CommandList, PaintCommand};

/// The "draw" button: green background, a centered background rectangle,
/// a figure in the middle, committed in one frame.
pub fn draw_scene() -> CommandList {
    [
        PaintCommand::Green,
        PaintCommand::BgRect {
            x1: 0.05,
            y1: 0.05,
            x2: 0.95,
            y2: 0.95,
        },
        PaintCommand::Figure { x: 0.5, y: 0.5 },
        PaintCommand::Update,
    ]
    .into_iter()
    .collect()
}

/// The "draw and move" button: place a figure near the top-left corner,
/// then walk it diagonally across the board in nine further frames.
pub fn draw_and_move_steps() -> Vec<CommandList> {
    let mut steps = vec![[
        PaintCommand::White,
        PaintCommand::Figure { x: 0.05, y: 0.05 },
        PaintCommand::Update,
    ]
    .into_iter()
    .collect::<CommandList>()];

    for _ in 1..10 {
        steps.push(
            [
                PaintCommand::Move { dx: 0.1, dy: 0.1 },
                PaintCommand::Update,
            ]
            .into_iter()
            .collect(),
        );
    }

    steps
}

/// Clears the artboard back to its initial state.
pub fn reset_scene() -> CommandList {
    [PaintCommand::Reset, PaintCommand::Update]
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draw_scene_commits_a_single_frame() {
        let scene = draw_scene();
        assert_eq!(
            scene.tokens(),
            ["green", "bgrect 0.05 0.05 0.95 0.95", "figure 0.5 0.5", "update"]
        );
    }

    #[test]
    fn draw_and_move_walks_the_figure_in_ten_steps() {
        let steps = draw_and_move_steps();
        assert_eq!(steps.len(), 10);
        assert_eq!(
            steps[0].tokens(),
            ["white", "figure 0.05 0.05", "update"]
        );
        for step in &steps[1..] {
            assert_eq!(step.tokens(), ["move 0.1 0.1", "update"]);
        }
    }

    #[test]
    fn reset_scene_clears_and_commits() {
        assert_eq!(reset_scene().tokens(), ["reset", "update"]);
    }
}
