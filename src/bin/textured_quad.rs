#![warn(clippy::pedantic)]
//! Scene 2: a square sampling two textures, blended by `mixValue` (arrow
//! up/down) and slid back and forth by a sine-driven `offset`.

use std::time::Instant;

use glam::Vec3;
use glium::Surface;
use winit::keyboard::KeyCode;

use glprimer::frame::FrameClock;
use glprimer::input::InputState;
use glprimer::uniforms::UniformSet;
use glprimer::{geometry, shader, texture};

fn main() {
    env_logger::init();

    let event_loop = winit::event_loop::EventLoopBuilder::new().build().unwrap();
    let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
        .with_title("textured quad")
        .with_inner_size(800, 600)
        .build(&event_loop);
    log::info!("OpenGL {}", display.get_opengl_version_string());

    let square = geometry::unit_square(&display).unwrap();
    let program = shader::load_or_fallback(
        &display,
        "assets/shaders/texture.vert",
        "assets/shaders/texture.frag",
    );
    let base_texture = texture::load_or_fallback(&display, "assets/textures/checker.png");
    let overlay_texture = texture::load_or_fallback(&display, "assets/textures/rings.png");

    let started = Instant::now();
    let mut clock = FrameClock::new();
    let mut input = InputState::new();
    let mut mix_value = 0.5f32;

    event_loop
        .run(move |event, window_target| {
            match event {
                winit::event::Event::WindowEvent { event, .. } => match event {
                    winit::event::WindowEvent::CloseRequested => window_target.exit(),

                    winit::event::WindowEvent::RedrawRequested => {
                        clock.tick();

                        // held arrows nudge the blend a step per frame
                        if input.is_held(KeyCode::ArrowUp) {
                            mix_value = (mix_value + 0.01).min(1.0);
                        }
                        if input.is_held(KeyCode::ArrowDown) {
                            mix_value = (mix_value - 0.01).max(0.0);
                        }

                        let slide = started.elapsed().as_secs_f32().sin() * 0.4;

                        let mut target = display.draw();
                        target.clear_color(0.2, 0.3, 0.3, 1.0);

                        let uniforms = UniformSet::new()
                            .sampler("texture1", &base_texture)
                            .sampler("texture2", &overlay_texture)
                            .float("mixValue", mix_value)
                            .vec3("offset", Vec3::new(slide, 0.0, 0.0));
                        target
                            .draw(
                                &square.vertices,
                                &square.indices,
                                program.program(),
                                &uniforms,
                                &Default::default(),
                            )
                            .unwrap();

                        target.finish().unwrap();
                    }
                    winit::event::WindowEvent::Resized(window_size) => {
                        display.resize(window_size.into());
                    }
                    winit::event::WindowEvent::KeyboardInput { event, .. } => {
                        if event.state == winit::event::ElementState::Pressed
                            && event.physical_key
                                == winit::keyboard::PhysicalKey::Code(KeyCode::Escape)
                        {
                            window_target.exit();
                        }
                        input.record_key(&event);
                    }
                    _ => (),
                },
                winit::event::Event::AboutToWait => {
                    window.request_redraw();
                }
                _ => (),
            };
        })
        .unwrap();
}
