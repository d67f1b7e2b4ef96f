//! Integration tests for rendering scenes through a camera
//!
//! These tests cover the full path from scene file to display list:
//! 1. Paint order follows traversal order
//! 2. Triangles fill without outline, polylines stroke without fill
//! 3. Stroke width scales with the painter's resolution

use veusz_render::{Camera, PaintCommand, RecordingPainter, SceneRenderer, Viewport};
use veusz_threed::{LineProp, LineStyle, NodeTemplate, Rgba8, SceneFile, SurfaceProp, TransformOp};

fn renderer() -> SceneRenderer {
    SceneRenderer::new(Camera::new().with_distance(6.0), Viewport::new(400.0, 300.0))
}

fn two_item_scene() -> SceneFile {
    SceneFile::new("two items")
        .with_surface("red", SurfaceProp::from_rgb(1.0, 0.0, 0.0).with_trans(0.5))
        .with_line("thick", LineProp::from_rgb(0.0, 0.0, 1.0).with_width(2.0).with_style(LineStyle::Dash))
        .with_root(NodeTemplate::Compound {
            transform: vec![TransformOp::RotateY(0.2)],
            children: vec![
                NodeTemplate::Triangle {
                    points: vec![[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
                    surface: "red".to_string(),
                    transform: vec![],
                },
                NodeTemplate::Polyline {
                    points: vec![[-1.0, -1.0, 0.0], [1.0, -1.0, 0.0], [1.0, 1.0, 0.0]],
                    line: "thick".to_string(),
                    transform: vec![TransformOp::Translate(0.0, 0.0, 0.5)],
                },
            ],
        })
}

#[test]
fn test_render_paints_in_traversal_order() {
    let scene = two_item_scene().instantiate().unwrap();
    let mut painter = RecordingPainter::new(72.0);

    let stats = renderer().render(&scene, &mut painter).unwrap();
    assert_eq!(stats.triangles, 1);
    assert_eq!(stats.polylines, 1);
    assert_eq!(stats.degenerate, 0);

    let kinds: Vec<&str> = painter
        .commands()
        .iter()
        .map(|c| match c {
            PaintCommand::SetBrush(_) => "brush",
            PaintCommand::SetPen(_) => "pen",
            PaintCommand::Polygon(_) => "polygon",
            PaintCommand::Polyline(_) => "polyline",
        })
        .collect();
    assert_eq!(kinds, vec!["brush", "pen", "polygon", "brush", "pen", "polyline"]);
}

#[test]
fn test_triangle_fills_and_polyline_strokes() {
    let scene = two_item_scene().instantiate().unwrap();
    let mut painter = RecordingPainter::new(72.0);
    renderer().render(&scene, &mut painter).unwrap();

    let commands = painter.commands();
    assert_eq!(commands[0], PaintCommand::SetBrush(Some(Rgba8::new(255, 0, 0, 127))));
    assert_eq!(commands[1], PaintCommand::SetPen(None));
    assert_eq!(commands[3], PaintCommand::SetBrush(None));

    match &commands[4] {
        PaintCommand::SetPen(Some(stroke)) => {
            assert_eq!(stroke.color, Rgba8::new(0, 0, 255, 255));
            assert_eq!(stroke.style, LineStyle::Dash);
            assert!((stroke.width - 2.0).abs() < 1e-6);
        }
        other => panic!("Expected a pen, got {:?}", other),
    }
}

#[test]
fn test_stroke_width_follows_resolution() {
    let scene = two_item_scene().instantiate().unwrap();
    let mut painter = RecordingPainter::new(144.0).with_scaling(1.5);
    renderer().render(&scene, &mut painter).unwrap();

    let width = painter
        .commands()
        .iter()
        .find_map(|c| match c {
            PaintCommand::SetPen(Some(stroke)) => Some(stroke.width),
            _ => None,
        })
        .unwrap();
    // 2pt at 144dpi with 1.5x scaling
    assert!((width - 6.0).abs() < 1e-5, "got {}", width);
}

#[test]
fn test_projected_points_land_in_viewport() {
    let scene = two_item_scene().instantiate().unwrap();
    let mut painter = RecordingPainter::new(72.0);
    renderer().render(&scene, &mut painter).unwrap();

    for command in painter.commands() {
        if let PaintCommand::Polygon(points) | PaintCommand::Polyline(points) = command {
            for p in points {
                assert!(p.x >= 0.0 && p.x <= 400.0, "x out of viewport: {}", p.x);
                assert!(p.y >= 0.0 && p.y <= 300.0, "y out of viewport: {}", p.y);
            }
        }
    }
}

#[test]
fn test_empty_scene_paints_nothing() {
    let scene = SceneFile::new("empty").instantiate().unwrap();
    let mut painter = RecordingPainter::new(72.0);
    let stats = renderer().render(&scene, &mut painter).unwrap();
    assert_eq!(stats.drawn(), 0);
    assert!(painter.commands().is_empty());
}

#[test]
fn test_point_at_eye_counts_as_degenerate() {
    // The camera sits at (0, 0, 6), where clip-space w is zero
    let file = SceneFile::new("at eye")
        .with_surface("s", SurfaceProp::default())
        .with_root(NodeTemplate::Triangle {
            points: vec![[0.0, 0.0, 6.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            surface: "s".to_string(),
            transform: vec![],
        });
    let scene = file.instantiate().unwrap();
    let mut painter = RecordingPainter::new(72.0);

    let stats = renderer().render(&scene, &mut painter).unwrap();
    assert_eq!(stats.triangles, 1);
    assert_eq!(stats.degenerate, 1);
}
