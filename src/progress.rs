// src/progress.rs
use std::time::{Duration, Instant};

pub const STEP_INTERVAL: Duration = Duration::from_secs(3);

pub const STEPS: [&str; 13] = [
    "Validando dados e preparando análise arqueológica...",
    "WebSailor navegando e coletando dados reais...",
    "Extraindo conteúdo de fontes preferenciais...",
    "Gemini 2.5 Pro executando análise forense...",
    "Arqueólogo Mestre escavando DNA da conversão...",
    "Mestre Visceral executando engenharia reversa...",
    "Arquiteto criando drivers mentais customizados...",
    "Diretor criando arsenal de PROVIs devastadoras...",
    "Especialista construindo sistema anti-objeção...",
    "Mestre orquestrando pré-pitch invisível...",
    "Calculando métricas forenses objetivas...",
    "Predizendo futuro do mercado...",
    "Consolidando análise arqueológica final...",
];

const DONE_MESSAGE: &str = "Análise arqueológica concluída!";

/// Cosmetic step ticker shown while a request is in flight.
///
/// This is a UX illusion, not backend progress: it advances on wall-clock
/// ticks with no causal link to the real request, and the request outcome
/// forces it to 100% via `finish` no matter how many steps had elapsed.
#[derive(Debug)]
pub struct ProgressSim {
    current: usize,
    last_advance: Instant,
    finished: bool,
}

impl ProgressSim {
    pub fn start(now: Instant) -> Self {
        Self {
            current: 0,
            last_advance: now,
            finished: false,
        }
    }

    /// Advance one step per elapsed interval, saturating at the last step.
    pub fn tick(&mut self, now: Instant) {
        if self.finished {
            return;
        }
        while now.duration_since(self.last_advance) >= STEP_INTERVAL
            && self.current < STEPS.len()
        {
            self.current += 1;
            self.last_advance += STEP_INTERVAL;
        }
    }

    /// Force the display to 100% with the final message.
    pub fn finish(&mut self) {
        self.current = STEPS.len();
        self.finished = true;
    }

    pub fn fraction(&self) -> f32 {
        self.current as f32 / STEPS.len() as f32
    }

    /// `current/total` as shown in the step counter.
    pub fn counter(&self) -> (usize, usize) {
        (self.current, STEPS.len())
    }

    pub fn message(&self) -> &'static str {
        if self.finished {
            DONE_MESSAGE
        } else {
            // Step N displays while waiting for step N+1 to elapse.
            STEPS[self.current.min(STEPS.len() - 1)]
        }
    }

    /// Remaining time at the nominal pace, formatted `m:ss`.
    pub fn eta(&self) -> String {
        let remaining = (STEPS.len() - self.current) as u64 * STEP_INTERVAL.as_secs();
        format!("{}:{:02}", remaining / 60, remaining % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn does_not_advance_before_interval() {
        let start = Instant::now();
        let mut sim = ProgressSim::start(start);
        sim.tick(start + Duration::from_secs(2));
        assert_eq!(sim.counter(), (0, 13));
        assert_eq!(sim.message(), STEPS[0]);
    }

    #[test]
    fn advances_one_step_per_interval() {
        let start = Instant::now();
        let mut sim = ProgressSim::start(start);
        sim.tick(start + Duration::from_secs(3));
        assert_eq!(sim.counter(), (1, 13));
        sim.tick(start + Duration::from_secs(9));
        assert_eq!(sim.counter(), (3, 13));
    }

    #[test]
    fn saturates_at_last_step_while_waiting() {
        let start = Instant::now();
        let mut sim = ProgressSim::start(start);
        sim.tick(start + Duration::from_secs(3600));
        assert_eq!(sim.counter(), (13, 13));
        // Not finished: the final message only comes from the real response.
        assert_eq!(sim.message(), STEPS[12]);
    }

    #[test]
    fn finish_forces_full_display() {
        let start = Instant::now();
        let mut sim = ProgressSim::start(start);
        sim.tick(start + Duration::from_secs(6));
        sim.finish();
        assert_eq!(sim.counter(), (13, 13));
        assert!((sim.fraction() - 1.0).abs() < f32::EPSILON);
        assert_eq!(sim.message(), DONE_MESSAGE);
        assert_eq!(sim.eta(), "0:00");

        // Further ticks are ignored once finished.
        sim.tick(start + Duration::from_secs(60));
        assert_eq!(sim.counter(), (13, 13));
    }

    #[test]
    fn eta_counts_down_at_three_seconds_per_step() {
        let start = Instant::now();
        let mut sim = ProgressSim::start(start);
        assert_eq!(sim.eta(), "0:39");
        sim.tick(start + Duration::from_secs(3));
        assert_eq!(sim.eta(), "0:36");
    }
}
