#![warn(clippy::pedantic)]
//! Scene 3: a field of Phong-lit cubes and a lamp cube, explored with a
//! first-person fly camera (WASD/Space/C, mouse look, scroll zoom, shift
//! boost).

use std::time::Instant;

use glam::{Mat4, Vec3};
use glium::Surface;
use winit::keyboard::KeyCode;
use winit::window::CursorGrabMode;

use glprimer::camera::Camera;
use glprimer::frame::FrameClock;
use glprimer::input::{fly_controls, InputState};
use glprimer::uniforms::{Light, Material, UniformSet};
use glprimer::{geometry, shader};

const WIDTH: u32 = 800;
const HEIGHT: u32 = 600;

const CUBE_POSITIONS: [[f32; 3]; 7] = [
    [0.0, 0.0, 0.0],
    [2.0, 1.2, -3.5],
    [-1.9, -0.8, -2.3],
    [1.4, -1.6, -5.0],
    [-2.8, 1.5, -6.2],
    [0.6, 2.2, -8.0],
    [-1.2, 0.3, -9.5],
];

fn main() {
    env_logger::init();

    let event_loop = winit::event_loop::EventLoopBuilder::new().build().unwrap();
    let (window, display) = glium::backend::glutin::SimpleWindowBuilder::new()
        .with_title("lit cubes")
        .with_inner_size(WIDTH, HEIGHT)
        .build(&event_loop);
    log::info!("OpenGL {}", display.get_opengl_version_string());

    // keep the cursor inside so mouse deltas keep arriving
    window.set_cursor_visible(false);
    if window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked))
        .is_err()
    {
        log::warn!("cursor grab unavailable, mouse look may escape the window");
    }

    let cube = geometry::unit_cube(&display).unwrap();
    let no_indices = glium::index::NoIndices(glium::index::PrimitiveType::TrianglesList);

    let lit_program = shader::load_or_fallback(
        &display,
        "assets/shaders/cube.vert",
        "assets/shaders/cube.frag",
    );
    let lamp_program = shader::load_or_fallback(
        &display,
        "assets/shaders/lamp.vert",
        "assets/shaders/lamp.frag",
    );

    let material = Material {
        ambient: Vec3::new(1.0, 0.5, 0.31),
        diffuse: Vec3::new(1.0, 0.5, 0.31),
        specular: Vec3::splat(0.5),
        shininess: 32.0,
    };
    let light = Light {
        position: Vec3::new(1.2, 1.0, 2.0),
        ambient: Vec3::splat(0.2),
        diffuse: Vec3::splat(0.5),
        specular: Vec3::ONE,
    };

    let params = glium::DrawParameters {
        depth: glium::Depth {
            test: glium::DepthTest::IfLess,
            write: true,
            ..Default::default()
        },
        ..Default::default()
    };

    let mut camera = Camera::new(WIDTH, HEIGHT, Vec3::new(0.0, 0.0, 3.0));
    let mut input = InputState::new();
    let started = Instant::now();
    let mut clock = FrameClock::new();

    event_loop
        .run(move |event, window_target| {
            match event {
                winit::event::Event::WindowEvent { event, .. } => match event {
                    winit::event::WindowEvent::CloseRequested => window_target.exit(),

                    winit::event::WindowEvent::RedrawRequested => {
                        let dt = clock.tick();

                        fly_controls(&input, &mut camera, dt);
                        if let Some((x, y)) = input.cursor() {
                            camera.process_mouse(x, y, true);
                        }
                        camera.process_scroll(input.take_scroll());

                        let (width, height) = display.get_framebuffer_dimensions();
                        let aspect = width as f32 / height.max(1) as f32;
                        let view = camera.view_matrix();
                        let projection = camera.projection_matrix(aspect);
                        let time = started.elapsed().as_secs_f32();

                        let mut target = display.draw();
                        target.clear_color_and_depth((0.1, 0.1, 0.1, 1.0), 1.0);

                        for (index, position) in CUBE_POSITIONS.iter().enumerate() {
                            // model matrices rebuilt from scratch each frame;
                            // the object count is small and fixed
                            let angle = 20.0f32.to_radians() * index as f32 + time * 0.9;
                            let model = Mat4::from_translation(Vec3::from(*position))
                                * Mat4::from_axis_angle(
                                    Vec3::new(1.0, 0.3, 0.5).normalize(),
                                    angle,
                                );
                            let uniforms = UniformSet::new()
                                .mat4("model", model)
                                .mat4("view", view)
                                .mat4("projection", projection)
                                .mat4("tiModel", model.inverse().transpose())
                                .vec3("viewPos", camera.position)
                                .material(&material)
                                .light(&light);
                            target
                                .draw(&cube, no_indices, lit_program.program(), &uniforms, &params)
                                .unwrap();
                        }

                        // small unlit cube marking the light itself
                        let lamp_model = Mat4::from_translation(light.position)
                            * Mat4::from_scale(Vec3::splat(0.2));
                        let uniforms = UniformSet::new()
                            .mat4("model", lamp_model)
                            .mat4("view", view)
                            .mat4("projection", projection);
                        target
                            .draw(&cube, no_indices, lamp_program.program(), &uniforms, &params)
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
                    winit::event::WindowEvent::CursorMoved { position, .. } => {
                        input.record_cursor(position.x as f32, position.y as f32);
                    }
                    winit::event::WindowEvent::MouseWheel { delta, .. } => {
                        input.record_scroll(match delta {
                            winit::event::MouseScrollDelta::LineDelta(_, y) => y,
                            winit::event::MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / 20.0,
                        });
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
