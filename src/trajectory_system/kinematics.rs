#[derive(Debug)]
pub struct Kinematics {
    pub position_y: f64,    // m above the launch site
    pub velocity: f64,      // m/s, signed vertical
    pub acceleration: f64,  // m/s²
    pub time: f64,          // s of accumulated flight
}

impl Kinematics {
    pub fn new() -> Self {
        Kinematics {
            position_y: 0.0,
            velocity: 0.0,
            acceleration: 0.0,
            time: 0.0,
        }
    }

    // Explicit Euler, position first: the altitude moves with the velocity
    // from the previous tick before any new force is applied.
    pub fn advance_position(&mut self, delta_time: f64) {
        self.position_y += self.velocity * delta_time;
        self.time += delta_time;
    }

    pub fn apply_acceleration(&mut self, acceleration: f64, delta_time: f64) {
        self.acceleration = acceleration;
        self.velocity += acceleration * delta_time;
    }

    // Inelastic ground contact. Returns true when the state was clamped.
    pub fn clamp_to_ground(&mut self) -> bool {
        if self.position_y < 0.0 {
            self.position_y = 0.0;
            self.velocity = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        *self = Kinematics::new();
    }

    pub fn get_time(&self) -> f64 {
        self.time
    }
}
