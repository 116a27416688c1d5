use balloon_simulation::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut sandbox = Sandbox::new(GasSpecies::Helium);

    // Boyle's law first: drop the ambient pressure and watch the envelope
    // answer while P·V holds.
    sandbox.select_mode(SimMode::Boyle);
    sandbox.start_ramp(RampParameter::Pressure, 40_000.0)?;

    println!("--- Boyle mode: ramping pressure 101325 Pa -> 40000 Pa ---");
    let mut frame = 0;
    while sandbox.ramp.active {
        let report = sandbox.advance_frame(TIME_STEP);
        frame += 1;

        if frame % 20 == 0 {
            let s = report.snapshot;
            println!(
                "t = {:>5.1} s | P = {:>8.1} Pa | V = {:>6.3} m³ | P·V = {:>9.1} J",
                s.elapsed,
                s.pressure,
                s.volume,
                s.pressure * s.volume
            );
        }
    }

    // Then a full mission: a helium balloon climbing until its envelope
    // lets go, followed by the automatic recovery.
    sandbox.select_mode(SimMode::Mission);
    sandbox.engine.set_max_radius(2.0);

    println!("\n--- Mission mode: helium balloon, burst radius 2.0 m ---");
    let air_density = sandbox
        .engine
        .aerostatics
        .air_density(&sandbox.engine.environment);
    let fill_density = sandbox
        .engine
        .aerostatics
        .gas_density(&sandbox.engine.environment, sandbox.engine.balloon.gas);
    println!(
        "Fill gas {}: {:.3} kg/m³ against {:.3} kg/m³ of air",
        sandbox.engine.balloon.gas.symbol(),
        fill_density,
        air_density
    );
    sandbox.launch()?;
    let mut telemetry = Telemetry::with_sample_interval(60.0);
    loop {
        let report = sandbox.advance_frame(TIME_STEP);
        telemetry.collect_data(&report.snapshot, TIME_STEP);

        if report.exploded {
            telemetry.record_burst();
            println!(
                "Burst at {:.0} m after {}s of flight!",
                report.snapshot.altitude,
                sandbox.engine.kinematics.get_time().round()
            );
        }
        if report.reset_fired {
            println!("Recovered: balloon re-filled at ground level.");
            break;
        }
        if report.snapshot.elapsed > MAX_SIMULATION_TIME {
            println!("Simulation time limit reached without a burst.");
            break;
        }
    }

    telemetry.display_data();

    Ok(())
}
