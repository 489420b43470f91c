#![warn(clippy::pedantic)]
//! Scene 1: two triangles and an indexed rectangle, pulsing through a
//! sine-driven `ourColor`.

use std::time::Instant;

use glam::Vec4;
use glium::Surface;

use glprimer::frame::FrameClock;
use glprimer::uniforms::UniformSet;
use glprimer::{geometry, shader};

fn main() {
    env_logger::init();

    let event_loop = winit::event_loop::EventLoopBuilder::new().build().unwrap();
    let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
        .with_title("triangles")
        .with_inner_size(800, 600)
        .build(&event_loop);
    log::info!("OpenGL {}", display.get_opengl_version_string());

    let left = geometry::triangle(&display, 0.0).unwrap();
    let right = geometry::triangle(&display, 1.0).unwrap();
    let banner = geometry::banner_rectangle(&display).unwrap();
    let no_indices = glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList);

    let program = shader::load_or_fallback(
        &display,
        "assets/shaders/color.vert",
        "assets/shaders/color.frag",
    );

    let started = Instant::now();
    let mut clock = FrameClock::new();

    // rendering loop
    event_loop
        .run(move |event, window_target| {
            match event {
                winit::event::Event::WindowEvent { event, .. } => match event {
                    winit::event::WindowEvent::CloseRequested => window_target.exit(),

                    winit::event::WindowEvent::RedrawRequested => {
                        clock.tick();
                        let pulse = started.elapsed().as_secs_f32().sin() / 2.0 + 0.5;

                        let mut target = display.draw();
                        target.clear_color(0.2, 0.3, 0.3, 1.0);

                        let red = UniformSet::new().vec4("ourColor", Vec4::new(pulse, 0.0, 0.0, 1.0));
                        target
                            .draw(
                                &banner.vertices,
                                &banner.indices,
                                program.program(),
                                &red,
                                &Default::default(),
                            )
                            .unwrap();

                        let green =
                            UniformSet::new().vec4("ourColor", Vec4::new(0.0, pulse, 0.0, 1.0));
                        for triangle in [&left, &right] {
                            target
                                .draw(
                                    triangle,
                                    no_indices,
                                    program.program(),
                                    &green,
                                    &Default::default(),
                                )
                                .unwrap();
                        }

                        target.finish().unwrap();
                    }
                    // resize the display when the window's size has changed
                    winit::event::WindowEvent::Resized(window_size) => {
                        display.resize(window_size.into());
                    }
                    winit::event::WindowEvent::KeyboardInput { event, .. } => {
                        if event.state == winit::event::ElementState::Pressed
                            && event.physical_key
                                == winit::keyboard::PhysicalKey::Code(
                                    winit::keyboard::KeyCode::Escape,
                                )
                        {
                            window_target.exit();
                        }
                    }
                    _ => (),
                },
                // ensures continuous rendering
                winit::event::Event::AboutToWait => {
                    window.request_redraw();
                }
                _ => (),
            };
        })
        .unwrap();
}
