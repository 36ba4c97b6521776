use clap::Parser;
use hazard_sim_core::{FireConfig, HazardSimulation, SceneVisualData, Vec3};

/// Hazard simulation demo: a ring of fires versus a periodic suppressant
#[derive(Parser, Debug)]
#[command(name = "hazard-sim-demo")]
#[command(about = "Headless environmental hazard simulation demo", long_about = None)]
struct Args {
    /// Simulation duration in seconds
    #[arg(short, long, default_value_t = 120.0)]
    duration: f32,

    /// Fixed timestep in seconds
    #[arg(long, default_value_t = 0.016)]
    dt: f32,

    /// Number of fires to spawn
    #[arg(short, long, default_value_t = 7)]
    fires: u32,

    /// Radius of the fire ring in meters
    #[arg(long, default_value_t = 12.0)]
    ring_radius: f32,

    /// Seconds between suppressant discharges (0 = never discharge)
    #[arg(short, long, default_value_t = 1.0)]
    suppress_interval: f32,

    /// Report interval in seconds
    #[arg(short, long, default_value_t = 5.0)]
    report_interval: f32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    println!("=== Hazard Simulation Demo ===\n");

    let mut sim = HazardSimulation::default();
    for i in 0..args.fires {
        let angle = std::f32::consts::TAU * i as f32 / args.fires.max(1) as f32;
        let position = Vec3::new(
            angle.cos() * args.ring_radius,
            angle.sin() * args.ring_radius,
            0.0,
        );
        sim.spawn_fire(position, FireConfig::default());
    }
    println!(
        "Spawned {} fires in a {:.0}m ring, strength {}%",
        args.fires,
        args.ring_radius,
        sim.hazard_strength()
    );

    let mut elapsed = 0.0f32;
    let mut next_discharge = args.suppress_interval;
    let mut next_report = args.report_interval;

    while elapsed < args.duration {
        sim.update(args.dt);
        elapsed += args.dt;

        // Aim each discharge at the strongest surviving fire
        if args.suppress_interval > 0.0 && elapsed >= next_discharge {
            next_discharge += args.suppress_interval;
            if let Some(target) = sim
                .fires()
                .iter()
                .max_by(|a, b| a.current_intensity().total_cmp(&b.current_intensity()))
                .map(|fire| fire.position())
            {
                // Discharge from slightly off the target, facing it
                let origin = target + Vec3::new(0.0, -2.0, 0.0);
                sim.discharge_suppressant(origin, target - origin);
            }
        }

        if elapsed >= next_report {
            next_report += args.report_interval;
            let scene = SceneVisualData::capture(&sim);
            let particle_total: usize = scene
                .fire
                .iter()
                .chain(&scene.smoke)
                .chain(&scene.ash)
                .map(hazard_sim_core::ParticleVisualData::particle_count)
                .sum();
            println!(
                "t={:6.1}s  strength {:3}%  fires {:2}  smoke {:2}  ash {:2}  particles {:4}  lights {:2}",
                elapsed,
                sim.hazard_strength(),
                sim.fires().len(),
                sim.smoke().len(),
                sim.ash().len(),
                particle_total,
                scene.lights.len(),
            );
        }

        if sim.fires().is_empty() {
            println!(
                "\nAll hazards contained after {:.1}s - strength {}%",
                elapsed,
                sim.hazard_strength()
            );
            return;
        }
    }

    println!(
        "\nTime expired after {:.1}s - {} fires remain at strength {}%",
        elapsed,
        sim.fires().len(),
        sim.hazard_strength()
    );
}
