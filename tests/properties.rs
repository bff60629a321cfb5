use gpui_funcplot::{
    CanvasSize, CoordinateMapper, Plot, PointerButton, PointerEvent, PointerPosition,
    SampleSet, ScreenPoint, Viewport,
};
use quickcheck_macros::quickcheck;

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

fn bounds(min: i16, span: u16) -> (f64, f64) {
    let min = f64::from(min) / 8.0;
    let span = (f64::from(span) + 1.0) / 16.0;
    (min, min + span)
}

fn drag(plot: &mut Plot, from: (u16, u16), to: (u16, u16)) {
    let corner = |(x, y): (u16, u16)| {
        PointerPosition::new(
            f32::from(x % (WIDTH as u16 + 1)),
            f32::from(y % (HEIGHT as u16 + 1)),
        )
    };
    plot.handle_event(PointerEvent::Down {
        button: PointerButton::Primary,
        position: corner(from),
    });
    plot.handle_event(PointerEvent::Move {
        position: corner(to),
    });
    plot.handle_event(PointerEvent::Up {
        button: PointerButton::Primary,
    });
}

#[quickcheck]
fn screen_roundtrip_within_one_pixel(
    min_x: i16,
    span_x: u16,
    min_y: i16,
    span_y: u16,
    width: u16,
    height: u16,
    px: u16,
    py: u16,
) -> bool {
    let (x0, x1) = bounds(min_x, span_x);
    let (y0, y1) = bounds(min_y, span_y);
    let width = u32::from(width % 2000) + 1;
    let height = u32::from(height % 2000) + 1;
    let Ok(canvas) = CanvasSize::new(width, height) else {
        return false;
    };
    let mapper = CoordinateMapper::new(Viewport::from_bounds(x0, x1, y0, y1), canvas);
    let point = ScreenPoint::new(
        (u32::from(px) % width) as i32,
        (u32::from(py) % height) as i32,
    );
    let back = mapper.to_screen(mapper.to_world(point));
    (back.x - point.x).abs() <= 1 && (back.y - point.y).abs() <= 1
}

#[quickcheck]
fn zoom_never_grows_the_window(
    a: (u16, u16),
    b: (u16, u16),
    c: (u16, u16),
    d: (u16, u16),
) -> bool {
    let canvas = CanvasSize::new(WIDTH, HEIGHT).expect("valid canvas");
    let mut plot = Plot::new(canvas).expect("default plot");

    let initial = plot.viewport();
    drag(&mut plot, a, b);
    let first = plot.viewport();
    drag(&mut plot, c, d);
    let second = plot.viewport();

    initial.contains(first)
        && first.contains(second)
        && second.x.min < second.x.max
        && second.y.min < second.y.max
}

#[quickcheck]
fn samples_strictly_ascend(min_x: i16, span_x: u16, step: u8) -> bool {
    let (x0, x1) = bounds(min_x, span_x);
    let step = (f64::from(step) + 1.0) / 64.0;
    let canvas = CanvasSize::new(WIDTH, HEIGHT).expect("valid canvas");
    let mapper = CoordinateMapper::new(Viewport::from_bounds(x0, x1, -1.0, 1.0), canvas);
    let Ok(mut set) = SampleSet::new(std::sync::Arc::new(f64::sin), step) else {
        return false;
    };
    set.regenerate(&mapper);
    !set.samples().is_empty()
        && set
            .samples()
            .windows(2)
            .all(|pair| pair[0].world.x < pair[1].world.x)
}
