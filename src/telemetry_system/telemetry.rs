use crate::control::engine::SimMode;
use crate::control::sandbox::StateSnapshot;

pub struct Telemetry {
    pub log: Vec<String>,
    max_altitude: f64,
    max_speed: f64,
    max_radius: f64,
    burst_count: u32,
    mode_times: Vec<(SimMode, f64)>,
    simulation_time: f64,
    sample_interval: f64, // s between logged lines
    next_sample: f64,
}

impl Telemetry {
    pub fn new() -> Self {
        Self::with_sample_interval(1.0)
    }

    pub fn with_sample_interval(sample_interval: f64) -> Self {
        Telemetry {
            log: Vec::new(),
            max_altitude: 0.0,
            max_speed: 0.0,
            max_radius: 0.0,
            burst_count: 0,
            mode_times: Vec::new(),
            simulation_time: 0.0,
            sample_interval,
            next_sample: 0.0,
        }
    }

    fn format_time(elapsed_time: f64) -> String {
        if elapsed_time >= 3600.0 {
            let hours = (elapsed_time / 3600.0).floor();
            let minutes = ((elapsed_time % 3600.0) / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}h {:.0}m {:.2}s", hours, minutes, seconds)
        } else if elapsed_time >= 60.0 {
            let minutes = (elapsed_time / 60.0).floor();
            let seconds = elapsed_time % 60.0;
            format!("{:.0}m {:.2}s", minutes, seconds)
        } else {
            format!("{:.2}s", elapsed_time)
        }
    }

    fn format_altitude(altitude: f64) -> String {
        if altitude >= 1000.0 {
            format!("{:.2} km", altitude / 1000.0)
        } else {
            format!("{:.2} m", altitude)
        }
    }

    pub fn collect_data(&mut self, snapshot: &StateSnapshot, delta_time: f64) {
        self.simulation_time += delta_time;

        // Update key metrics
        if snapshot.altitude > self.max_altitude {
            self.max_altitude = snapshot.altitude;
        }
        if snapshot.velocity.abs() > self.max_speed {
            self.max_speed = snapshot.velocity.abs();
        }
        if snapshot.radius.is_finite() && snapshot.radius > self.max_radius {
            self.max_radius = snapshot.radius;
        }

        if self.simulation_time >= self.next_sample {
            let data = format!(
                "Time: {} | Altitude: {} | Velocity: {:.2} m/s | Radius: {:.2} m | \
                 Volume: {:.2} m³ | Pressure: {:.0} Pa | Temperature: {:.1} K",
                Self::format_time(self.simulation_time),
                Self::format_altitude(snapshot.altitude),
                snapshot.velocity,
                snapshot.radius,
                snapshot.volume,
                snapshot.pressure,
                snapshot.temperature,
            );
            self.log.push(data);
            self.next_sample = self.simulation_time + self.sample_interval;
        }

        // Track mode transitions
        if let Some((last_mode, _)) = self.mode_times.last() {
            if *last_mode != snapshot.mode {
                self.mode_times.push((snapshot.mode, self.simulation_time));
            }
        } else {
            self.mode_times.push((snapshot.mode, self.simulation_time));
        }
    }

    pub fn record_burst(&mut self) {
        self.burst_count += 1;
    }

    pub fn get_burst_count(&self) -> u32 {
        self.burst_count
    }

    pub fn get_max_altitude(&self) -> f64 {
        self.max_altitude
    }

    pub fn display_data(&self) {
        println!("--- Telemetry Data ---");
        for entry in &self.log {
            println!("{}", entry);
        }
        println!("--- End of Telemetry ---");

        println!("\n--- Simulation Summary ---");
        println!("Max Altitude: {}", Self::format_altitude(self.max_altitude));
        println!("Max Vertical Speed: {:.2} m/s", self.max_speed);
        println!("Max Envelope Radius: {:.2} m", self.max_radius);
        println!("Bursts: {}", self.burst_count);

        println!("\n--- Mode Transitions ---");
        for (mode, time) in &self.mode_times {
            println!("Mode {:?} entered at: {}", mode, Self::format_time(*time));
        }
    }
}
