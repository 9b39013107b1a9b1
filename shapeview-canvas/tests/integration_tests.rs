//! Integration tests for shapeview-canvas.

use rstest::rstest;
use shapeview_canvas::{
    Canvas, CanvasColor, CircleParams, CompositeOp, Path2D, RectParams, Region, RoundRectParams,
};

fn rect(x: f32, y: f32, width: f32, height: f32) -> RectParams {
    RectParams {
        x,
        y,
        width,
        height,
    }
}

fn alpha(canvas: &Canvas, x: i32, y: i32) -> u8 {
    canvas.get_image_data(x, y, 1, 1)[3]
}

/// Test creating a canvas and drawing basic shapes.
#[test]
fn test_draw_rectangle() {
    let mut ctx = Canvas::new(200, 200).unwrap();

    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&rect(10.0, 10.0, 100.0, 100.0));

    let data = ctx.get_image_data(0, 0, 200, 200);
    let idx = (50 * 200 + 50) * 4;
    assert_eq!(&data[idx..idx + 4], &[255, 0, 0, 255]);

    let outside = (150 * 200 + 150) * 4;
    assert_eq!(data[outside + 3], 0);
}

/// A rounded rectangle keeps its corners empty and its middle filled.
#[test]
fn test_fill_round_rect_corners() {
    let mut ctx = Canvas::new(100, 100).unwrap();
    let path = Path2D::from_round_rect(&RoundRectParams::new(
        &rect(0.0, 0.0, 100.0, 100.0),
        [30.0, 0.0, 30.0, 0.0],
    ));
    ctx.fill_path2d(&path);

    // Rounded corners
    assert_eq!(alpha(&ctx, 1, 1), 0);
    assert_eq!(alpha(&ctx, 98, 98), 0);
    // Square corners
    assert_eq!(alpha(&ctx, 98, 1), 255);
    assert_eq!(alpha(&ctx, 1, 98), 255);
    assert_eq!(alpha(&ctx, 50, 50), 255);
}

/// Erasing with a region difference inside a layer leaves only the shape.
#[test]
fn test_erase_outside_circle_in_layer() {
    let mut ctx = Canvas::new(100, 100).unwrap();
    let bounds = rect(0.0, 0.0, 100.0, 100.0);
    {
        let mut layer = ctx.layer(&bounds).unwrap();
        layer.set_fill_style("#336699").unwrap();
        layer.fill_rect(&bounds);

        let outer = Region::from_rect(&bounds, 100, 100).unwrap();
        let circle = Region::from_path(
            &Path2D::from_circle(&CircleParams {
                x: 50.0,
                y: 50.0,
                radius: 40.0,
            }),
            100,
            100,
        )
        .unwrap();
        layer.set_composite_op(CompositeOp::DestinationOut);
        layer.fill_region(&outer.difference(&circle));
    }

    assert_eq!(ctx.get_image_data(50, 50, 1, 1), vec![0x33, 0x66, 0x99, 255]);
    assert_eq!(alpha(&ctx, 2, 2), 0);
    assert_eq!(alpha(&ctx, 97, 50), 0);
    assert_eq!(ctx.save_count(), 0);
}

/// Keeping the inside with a destination-in coverage region.
#[test]
fn test_keep_inside_with_destination_in() {
    let mut ctx = Canvas::new(60, 60).unwrap();
    ctx.set_fill_style("#00ff00").unwrap();
    ctx.fill_rect(&rect(0.0, 0.0, 60.0, 60.0));

    let circle = Region::from_path(
        &Path2D::from_circle(&CircleParams {
            x: 30.0,
            y: 30.0,
            radius: 20.0,
        }),
        60,
        60,
    )
    .unwrap();

    ctx.set_composite_op(CompositeOp::DestinationIn);
    ctx.fill_region(&circle);

    assert_eq!(ctx.get_image_data(30, 30, 1, 1), vec![0, 255, 0, 255]);
    assert_eq!(alpha(&ctx, 3, 3), 0);
}

/// Composite operations against an opaque red destination.
#[rstest]
#[case::source_over(CompositeOp::SourceOver, [0, 0, 255, 255])]
#[case::destination_out(CompositeOp::DestinationOut, [0, 0, 0, 0])]
#[case::destination_in(CompositeOp::DestinationIn, [255, 0, 0, 255])]
fn test_composite_ops(#[case] op: CompositeOp, #[case] expected: [u8; 4]) {
    let mut ctx = Canvas::new(10, 10).unwrap();
    ctx.set_fill_style_color(CanvasColor::from_rgba8(255, 0, 0, 255));
    ctx.fill_rect(&rect(0.0, 0.0, 10.0, 10.0));

    ctx.set_composite_op(op);
    ctx.set_fill_style_color(CanvasColor::from_rgba8(0, 0, 255, 255));
    ctx.fill_rect(&rect(0.0, 0.0, 10.0, 10.0));

    assert_eq!(ctx.get_image_data(5, 5, 1, 1), expected.to_vec());
}

/// Translucent destination-in keeps a matching share of the destination.
#[test]
fn test_destination_in_region_with_translucent_fill() {
    let mut ctx = Canvas::new(10, 10).unwrap();
    ctx.set_fill_style_color(CanvasColor::from_rgba8(255, 0, 0, 255));
    ctx.fill_rect(&rect(0.0, 0.0, 10.0, 10.0));

    let region = Region::from_rect(&rect(0.0, 0.0, 10.0, 10.0), 10, 10).unwrap();
    ctx.set_composite_op(CompositeOp::DestinationIn);
    ctx.set_fill_style_color(CanvasColor::from_rgba8(0, 0, 0, 128));
    ctx.fill_region(&region);

    let a = alpha(&ctx, 5, 5);
    assert!((127..=129).contains(&a), "alpha {}", a);
}

/// A stroke centered on an inset rect stays inside the canvas.
#[test]
fn test_inset_border_stroke() {
    let mut ctx = Canvas::new(50, 50).unwrap();
    ctx.set_line_width(6.0);
    ctx.set_stroke_style_color(CanvasColor::BLACK);
    ctx.stroke_path2d(&Path2D::from_round_rect(&RoundRectParams::new(
        &rect(0.0, 0.0, 50.0, 50.0).inset(3.0),
        [0.0; 4],
    )));

    assert_eq!(alpha(&ctx, 0, 25), 255);
    assert_eq!(alpha(&ctx, 5, 25), 255);
    assert_eq!(alpha(&ctx, 6, 25), 0);
    assert_eq!(alpha(&ctx, 49, 25), 255);
}

/// PNG export encodes the canvas pixels.
#[test]
fn test_to_png() {
    let mut ctx = Canvas::new(100, 100).unwrap();
    ctx.set_fill_style("#ff0000").unwrap();
    ctx.fill_rect(&rect(0.0, 0.0, 100.0, 100.0));

    let png_data = ctx.to_png(None).unwrap();

    // PNG magic bytes
    assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
}
