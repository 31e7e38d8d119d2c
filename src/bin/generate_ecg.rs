fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// One beat as a sum of gaussian bumps: P wave, QRS complex, T wave.
/// Times in seconds within the one-second record window.
fn beat(t: f64, waves: &[(f64, f64, f64)]) -> f64 {
    waves
        .iter()
        .map(|&(mu, sigma, amp)| gaussian(t, mu, sigma, amp))
        .sum()
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn generate_record(
    sampling_rate: f64,
    n_samples: usize,
    waves: &[(f64, f64, f64)],
    rng: &mut SimpleRng,
) -> Vec<f64> {
    // Phase offsets vary per record so the contaminations don't line up
    // identically across rows.
    let wander_phase = rng.next_f64() * std::f64::consts::TAU;
    let mains_phase = rng.next_f64() * std::f64::consts::TAU;

    (0..n_samples)
        .map(|k| {
            let t = k as f64 / sampling_rate;
            let clean = beat(t, waves);
            // Baseline wander at 0.3 Hz (removed by the default 0.5 Hz
            // high-pass) and mains pickup at 60 Hz (removed by the default
            // 50 Hz low-pass).
            let wander = 0.15 * (std::f64::consts::TAU * 0.3 * t + wander_phase).sin();
            let mains = 0.05 * (std::f64::consts::TAU * 60.0 * t + mains_phase).sin();
            clean + wander + mains + rng.gauss(0.0, 0.01)
        })
        .collect()
}

fn main() {
    let mut rng = SimpleRng::new(42);

    let sampling_rate = 200.0;
    let n_samples = 200; // one second per record

    // (centre s, width s, amplitude mV)
    let normal_waves = [
        (0.30, 0.020, 0.15),  // P
        (0.44, 0.008, -0.10), // Q
        (0.47, 0.010, 1.00),  // R
        (0.50, 0.008, -0.25), // S
        (0.65, 0.035, 0.30),  // T
    ];
    // Widened, depressed QRS with an inverted T wave.
    let abnormal_waves = [
        (0.30, 0.020, 0.10),
        (0.43, 0.016, -0.15),
        (0.47, 0.022, 0.55),
        (0.52, 0.016, -0.30),
        (0.65, 0.040, -0.25),
    ];

    let output_path = "ecg_sample.csv";
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .expect("Failed to create output file");

    let mut rows = 0usize;
    for (waves, label, count) in [(&normal_waves, 0, 20), (&abnormal_waves, 1, 10)] {
        for _ in 0..count {
            let samples = generate_record(sampling_rate, n_samples, waves, &mut rng);

            let mut fields: Vec<String> =
                samples.iter().map(|s| format!("{s:.5}")).collect();
            fields.push(label.to_string());
            writer.write_record(&fields).expect("Failed to write row");
            rows += 1;
        }
    }
    writer.flush().expect("Failed to flush output file");

    println!("Wrote {rows} records ({n_samples} samples each) to {output_path}");
}
