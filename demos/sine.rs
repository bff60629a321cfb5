use gpui::{
    AppContext, Application, Bounds, KeyBinding, WindowBounds, WindowOptions, actions, px, size,
};

use gpui_funcplot::{CanvasSize, GpuiPlotView, Plot};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

actions!(funcplot_demo, [ToggleAxes, ToggleMarkers]);

fn main() {
    tracing_subscriber::fmt::init();

    Application::new().run(|cx| {
        cx.bind_keys([
            KeyBinding::new("a", ToggleAxes, None),
            KeyBinding::new("m", ToggleMarkers, None),
        ]);

        let options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(Bounds::centered(
                None,
                size(px(WIDTH as f32), px(HEIGHT as f32)),
                cx,
            ))),
            ..Default::default()
        };

        cx.open_window(options, |_window, cx| {
            let canvas = CanvasSize::new(WIDTH, HEIGHT).expect("non-zero canvas");
            let plot = Plot::new(canvas).expect("default plot configuration");
            let view = GpuiPlotView::new(plot);
            let handle = view.plot_handle();
            let entity = cx.new(|_| view);

            // "a" flips the axes, "m" flips the markers.
            let (axes, axes_view) = (handle.clone(), entity.clone());
            cx.on_action(move |_: &ToggleAxes, cx| {
                let shown = axes.write(|plot| {
                    plot.toggle_axes();
                    plot.display_options().show_axes
                });
                tracing::info!(shown, "axes toggled");
                axes_view.update(cx, |_, cx| cx.notify());
            });
            let markers_view = entity.clone();
            cx.on_action(move |_: &ToggleMarkers, cx| {
                let shown = handle.write(|plot| {
                    plot.toggle_markers();
                    plot.display_options().show_markers
                });
                tracing::info!(shown, "markers toggled");
                markers_view.update(cx, |_, cx| cx.notify());
            });

            entity
        })
        .unwrap();
    });
}
