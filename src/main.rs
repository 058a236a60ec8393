use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use fluid_backdrop::config::{self, Config};
use fluid_backdrop::solver::diagnostics;
use fluid_backdrop::{FluidField, Frame};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Window, WindowOptions};
use rand::Rng;

fn create_field(cfg: &Config) -> Result<FluidField, fluid_backdrop::FluidError> {
    let (w, h) = (cfg.display.width, cfg.display.height);
    match cfg.stimulus.seed {
        Some(seed) => FluidField::with_seed(w, h, cfg.solver_params(), seed),
        None => FluidField::new(w, h, cfg.solver_params()),
    }
}

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cfg = config::load();
    let mut field = create_field(&cfg)?;
    let (w, h) = (cfg.display.width, cfg.display.height);
    log::info!("grid {}x{}, window {}x{}", field.size(), field.size(), w, h);

    let mut window = Window::new("fluid-backdrop", w, h, WindowOptions::default())?;
    window.set_target_fps(cfg.display.target_fps);

    // Ctrl+C handler
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || r.store(false, Ordering::SeqCst))?;

    let mut frame = Frame::new(w, h);
    let mut rng = rand::thread_rng();
    let mut autonomous = cfg.stimulus.random_motion;
    let chance = cfg.stimulus.chance();
    let hover_injects = cfg.stimulus.hover_injects;
    let mut last_pointer: Option<(f32, f32)> = None;
    let mut frame_count = 0u32;
    let mut last_fps_time = Instant::now();

    while window.is_open() && running.load(Ordering::SeqCst) {
        if window.is_key_pressed(Key::Escape, KeyRepeat::No) {
            break;
        }
        if window.is_key_pressed(Key::R, KeyRepeat::No) {
            field.reset();
        }
        if window.is_key_pressed(Key::Space, KeyRepeat::No) {
            autonomous = !autonomous;
            log::info!("random motion {}", if autonomous { "on" } else { "off" });
        }

        // --- Injection ---
        let pointer = window.get_mouse_pos(MouseMode::Discard);
        let dragging = window.get_mouse_down(MouseButton::Left);
        match pointer {
            Some((mx, my)) if pointer != last_pointer => {
                if dragging || hover_injects {
                    field.on_pointer_drag(mx as f64, my as f64);
                } else {
                    field.track_pointer(mx as f64, my as f64);
                }
            }
            _ => {}
        }
        if !dragging && autonomous && rng.gen_bool(chance) {
            field.random_motion();
        }
        last_pointer = pointer;

        // --- Advance + draw ---
        field.step();
        if !field.is_finite() {
            log::warn!("non-finite values in fluid state; resetting");
            field.reset();
        }
        frame.clear(cfg.display.background);
        field.render_hsv(&mut frame);
        field.fade_density();

        window.update_with_buffer(frame.pixels(), frame.width(), frame.height())?;

        frame_count += 1;
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            window.set_title(&format!("fluid-backdrop — {frame_count} fps"));
            let s = field.state();
            log::debug!(
                "density={:.1} ke={:.3e} max_div={:.3e}",
                diagnostics::total_density(s),
                diagnostics::kinetic_energy(&s.vx, &s.vy, s.n),
                diagnostics::max_divergence(&s.vx, &s.vy, s.n)
            );
            frame_count = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
