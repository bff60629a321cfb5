use gpui::{AppContext, Application, Bounds, WindowBounds, WindowOptions, px, size};

use gpui_funcplot::{CanvasSize, DisplayOptions, GpuiPlotView, Plot, Theme, Viewport};

fn main() {
    tracing_subscriber::fmt::init();

    Application::new().run(|cx| {
        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(960.0), px(540.0)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let plot = Plot::builder()
                .function(|x| (x * 2.0).sin() * (-x * x / 20.0).exp() * 3.0)
                .initial_view(Viewport::from_bounds(-8.0, 8.0, -4.0, 4.0))
                .step(0.05)
                .theme(Theme::dark())
                .display_options(DisplayOptions {
                    show_axes: true,
                    show_markers: false,
                })
                .build(CanvasSize::new(960, 540).expect("non-zero canvas"))
                .expect("valid plot configuration");

            tracing::info!(viewport = ?plot.viewport(), "plot ready");
            cx.new(|_| GpuiPlotView::new(plot))
        })
        .unwrap();
    });
}
