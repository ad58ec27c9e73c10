//! Owns the adapters and lends them to commands one run at a time.
use std::sync::Arc;
use std::time::Duration;

use pilot_core::{
    Calm, Clock, Command, CommandInfo, DirectPath, Env, Humanizer, KeyInput, KillSwitch,
    PathPlanner, Point, PositionFeed, Settings, SystemClock,
};
use serde::Serialize;

use crate::adapters::KillSwitchFlag;
use crate::config::PilotConfig;
use crate::error::{ConfigError, Result};
use crate::sim::{Physics, SimulatedCharacter};

/// Outcome of one command run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    pub command: CommandInfo,
    pub from: Point,
    pub to: Point,
    pub started: Duration,
    pub elapsed: Duration,
    /// The kill-switch was cleared when the command returned.
    pub interrupted: bool,
}

/// Adapters shared by every command a routine runs.
pub struct Pilot {
    position: Arc<dyn PositionFeed>,
    planner: Arc<dyn PathPlanner>,
    switch: Arc<dyn KillSwitch>,
    keys: Arc<dyn KeyInput>,
    clock: Arc<dyn Clock>,
    humanizer: Arc<dyn Humanizer>,
    settings: Settings,
}

impl Pilot {
    pub fn builder() -> PilotBuilder {
        PilotBuilder::new()
    }

    /// Pilot driving a [`SimulatedCharacter`] placed at `config.start`.
    pub fn simulated(
        config: &PilotConfig,
        physics: Physics,
        clock: Arc<dyn Clock>,
        switch: Arc<KillSwitchFlag>,
    ) -> Result<(Self, Arc<SimulatedCharacter>)> {
        let character = Arc::new(SimulatedCharacter::new(
            Arc::clone(&clock),
            physics,
            config.start,
        ));
        let pilot = Self::builder()
            .position(character.clone())
            .keys(character.clone())
            .switch(switch)
            .clock(clock)
            .humanizer(config.humanizer())
            .settings(config.settings.clone())
            .build()?;
        Ok((pilot, character))
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn env(&self) -> Env<'_> {
        Env::new(
            self.position.as_ref(),
            self.planner.as_ref(),
            self.switch.as_ref(),
            self.keys.as_ref(),
            self.clock.as_ref(),
            self.humanizer.as_ref(),
            &self.settings,
        )
    }

    /// Executes `command` once and reports where it left the character.
    pub fn run(&self, command: &mut dyn Command) -> RunReport {
        let env = self.env();
        let info = command.info();
        let from = env.position();
        let started = env.now();

        let _span = tracing::info_span!("run", command = %info.label()).entered();
        command.execute(&env);

        let report = RunReport {
            command: info,
            from,
            to: env.position(),
            started,
            elapsed: env.now().saturating_sub(started),
            interrupted: !env.is_enabled(),
        };
        tracing::debug!(
            to = %report.to,
            elapsed_ms = report.elapsed.as_millis() as u64,
            interrupted = report.interrupted,
            "run finished"
        );
        report
    }
}

/// Assembles a [`Pilot`]. Only the position feed and key input are required.
#[derive(Default)]
pub struct PilotBuilder {
    position: Option<Arc<dyn PositionFeed>>,
    planner: Option<Arc<dyn PathPlanner>>,
    switch: Option<Arc<dyn KillSwitch>>,
    keys: Option<Arc<dyn KeyInput>>,
    clock: Option<Arc<dyn Clock>>,
    humanizer: Option<Arc<dyn Humanizer>>,
    settings: Settings,
}

impl PilotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Arc<dyn PositionFeed>) -> Self {
        self.position = Some(position);
        self
    }

    pub fn planner(mut self, planner: Arc<dyn PathPlanner>) -> Self {
        self.planner = Some(planner);
        self
    }

    pub fn switch(mut self, switch: Arc<dyn KillSwitch>) -> Self {
        self.switch = Some(switch);
        self
    }

    pub fn keys(mut self, keys: Arc<dyn KeyInput>) -> Self {
        self.keys = Some(keys);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    pub fn humanizer(mut self, humanizer: Arc<dyn Humanizer>) -> Self {
        self.humanizer = Some(humanizer);
        self
    }

    pub fn settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    /// # Errors
    ///
    /// Fails if no position feed or key input was given.
    pub fn build(self) -> Result<Pilot> {
        let position = self.position.ok_or(ConfigError::MissingComponent {
            component: "position feed",
        })?;
        let keys = self.keys.ok_or(ConfigError::MissingComponent {
            component: "key input",
        })?;

        Ok(Pilot {
            position,
            keys,
            planner: self.planner.unwrap_or_else(|| Arc::new(DirectPath)),
            switch: self
                .switch
                .unwrap_or_else(|| Arc::new(KillSwitchFlag::default())),
            clock: self.clock.unwrap_or_else(|| Arc::new(SystemClock::new())),
            humanizer: self.humanizer.unwrap_or_else(|| Arc::new(Calm)),
            settings: self.settings,
        })
    }
}

#[cfg(test)]
mod tests {
    use pilot_core::ManualClock;

    use super::*;
    use crate::adapters::{SharedPosition, TracingKeys};

    #[test]
    fn build_requires_position_and_keys() {
        let err = Pilot::builder().build().err().unwrap();
        assert_eq!(
            err,
            ConfigError::MissingComponent {
                component: "position feed"
            }
        );

        let err = Pilot::builder()
            .position(Arc::new(SharedPosition::default()))
            .build()
            .err()
            .unwrap();
        assert_eq!(err.error_code(), "CONFIG_MISSING_COMPONENT");
    }

    #[test]
    fn run_reports_timing_and_positions() {
        let clock = Arc::new(ManualClock::new());
        let feed = Arc::new(SharedPosition::new(Point::new(0.2, 0.4)));
        let pilot = Pilot::builder()
            .position(feed)
            .keys(Arc::new(TracingKeys::new(clock.clone())))
            .clock(clock)
            .build()
            .unwrap();

        let mut jump = command_book::hero::Jump::parse("left").unwrap();
        let report = pilot.run(&mut jump);

        assert_eq!(report.command.label(), "Jump(direction=left)");
        assert_eq!(report.from, Point::new(0.2, 0.4));
        assert_eq!(report.to, report.from);
        // windup, two presses, settle
        assert_eq!(report.elapsed, Duration::from_millis(100 + 300 + 500));
        assert!(!report.interrupted);
    }

    #[test]
    fn report_serializes() {
        let clock = Arc::new(ManualClock::new());
        let (pilot, _) = Pilot::simulated(
            &PilotConfig::default(),
            Physics::default(),
            clock,
            Arc::new(KillSwitchFlag::default()),
        )
        .unwrap();

        let report = pilot.run(&mut command_book::hero::GatedSkill::shout());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["command"]["name"], "Shout");
        assert_eq!(json["interrupted"], false);
    }
}
