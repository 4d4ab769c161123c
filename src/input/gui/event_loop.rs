use crate::controllers::events::{InputEvent, ZoomEvent};
use crate::controllers::session::ExplorerSession;
use crate::core::actions::compute_grid::strategy::ComputeStrategy;
use crate::core::actions::zoom_viewport::ZoomDirection;
use crate::core::data::complex_rect::ComplexRect;
use crate::core::data::grid_spec::GridSpec;
use crate::presenters::pixels::PixelsPresenter;
use std::error::Error;
use tracing::error;
use winit::dpi::LogicalSize;
use winit::event::{Event, MouseScrollDelta, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::{Window, WindowBuilder};

/// Opens the explorer window and runs the event loop until quit.
///
/// Wheel input becomes a zoom event at the tracked cursor position; each
/// redraw asks the session to refresh, which recomputes only while dirty.
pub fn run_gui(
    region: ComplexRect,
    grid_spec: GridSpec,
    strategy: ComputeStrategy,
) -> Result<(), Box<dyn Error>> {
    let event_loop = EventLoop::new()?;

    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Mandelzoom")
            .with_inner_size(LogicalSize::new(
                f64::from(grid_spec.width()),
                f64::from(grid_spec.height()),
            ))
            .with_resizable(false)
            .build(&event_loop)?,
    ));

    let mut presenter = PixelsPresenter::new(window, grid_spec.width(), grid_spec.height())?;
    let mut session = ExplorerSession::new(region, grid_spec, strategy);

    let grid_width = f64::from(grid_spec.width());
    let grid_height = f64::from(grid_spec.height());
    let mut cursor = (grid_width / 2.0, grid_height / 2.0);

    event_loop.run(move |event, elwt| {
        elwt.set_control_flow(ControlFlow::Wait);

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    session.handle_event(InputEvent::Quit);
                    elwt.exit();
                }
                WindowEvent::Resized(size) => {
                    if size.width > 0 && size.height > 0 {
                        presenter.resize_surface(size.width, size.height);
                    }
                }
                WindowEvent::CursorMoved { position, .. } => {
                    // surface coordinates rescaled to grid coordinates
                    let size = window.inner_size();
                    if size.width > 0 && size.height > 0 {
                        cursor = (
                            position.x / f64::from(size.width) * grid_width,
                            position.y / f64::from(size.height) * grid_height,
                        );
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => f64::from(y),
                        MouseScrollDelta::PixelDelta(position) => position.y,
                    };

                    if scroll != 0.0 {
                        let direction = if scroll > 0.0 {
                            ZoomDirection::In
                        } else {
                            ZoomDirection::Out
                        };

                        session.handle_event(InputEvent::Zoom(ZoomEvent {
                            cursor_x: cursor.0,
                            cursor_y: cursor.1,
                            direction,
                        }));
                        window.request_redraw();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(err) = session.refresh(&mut presenter) {
                        error!(%err, "recompute cycle aborted");
                        elwt.exit();
                        return;
                    }

                    if let Err(err) = presenter.render() {
                        error!(%err, "surface render failed");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::AboutToWait => {
                window.request_redraw();
            }
            _ => {}
        }
    })?;

    Ok(())
}
