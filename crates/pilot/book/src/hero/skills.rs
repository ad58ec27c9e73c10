//! Skills that gate themselves on their own cooldown.
//!
//! Each command remembers when it last fired and skips silently while its
//! cooldown has not elapsed, so a routine can invoke it on every pass without
//! the scheduler tracking cooldowns.
use std::time::Duration;

use pilot_core::{Command, CommandInfo, Cooldown, Env, Key, PressTiming, Settings};

/// Static description of a single-key skill.
#[derive(Debug)]
pub struct SkillProfile {
    pub name: &'static str,
    pub key: Key,
    pub cooldown: Duration,
    /// Pause after firing so the next pass does not re-trigger mid-animation.
    pub settle: Duration,
}

pub static SHOUT: SkillProfile = SkillProfile {
    name: "Shout",
    key: Key::Q,
    cooldown: Duration::from_secs(10),
    settle: Duration::from_secs(1),
};

pub static WORLDREAVER: SkillProfile = SkillProfile {
    name: "Worldreaver",
    key: Key::E,
    cooldown: Duration::from_secs(20),
    settle: Duration::from_secs(1),
};

pub static RISING_RAGE: SkillProfile = SkillProfile {
    name: "RisingRage",
    key: Key::F,
    cooldown: Duration::from_secs(10),
    settle: Duration::from_secs(1),
};

pub static SWORD_ILLUSION: SkillProfile = SkillProfile {
    name: "SwordIllusion",
    key: Key::T,
    cooldown: Duration::from_secs(30),
    settle: Duration::from_millis(500),
};

/// A single-key attack gated by its cooldown.
#[derive(Clone, Debug)]
pub struct GatedSkill {
    profile: &'static SkillProfile,
    cooldown: Cooldown,
}

impl GatedSkill {
    pub fn new(profile: &'static SkillProfile) -> Self {
        Self {
            profile,
            cooldown: Cooldown::new(profile.cooldown),
        }
    }

    pub fn shout() -> Self {
        Self::new(&SHOUT)
    }

    pub fn worldreaver() -> Self {
        Self::new(&WORLDREAVER)
    }

    pub fn rising_rage() -> Self {
        Self::new(&RISING_RAGE)
    }

    pub fn sword_illusion() -> Self {
        Self::new(&SWORD_ILLUSION)
    }

    pub fn profile(&self) -> &'static SkillProfile {
        self.profile
    }

    pub fn last_fired(&self) -> Option<Duration> {
        self.cooldown.last_fired()
    }
}

impl Command for GatedSkill {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!(skill = self.profile.name, "attacking");

        let now = env.now();
        if !self.cooldown.try_fire(now) {
            tracing::debug!(skill = self.profile.name, "on cooldown");
            return;
        }
        env.press(self.profile.key, 1);
        env.sleep(self.profile.settle);
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(self.profile.name)
    }
}

/// One independently gated effect bundled into [`Buff`].
#[derive(Clone, Debug)]
struct BuffEffect {
    name: &'static str,
    key: Key,
    repetitions: u32,
    timing: PressTiming,
    cooldown: Cooldown,
}

impl BuffEffect {
    fn new(name: &'static str, key: Key, cooldown: Duration) -> Self {
        Self {
            name,
            key,
            repetitions: 2,
            timing: PressTiming::default(),
            cooldown: Cooldown::new(cooldown),
        }
    }
}

/// Casts the buff macro and the long-cooldown class buffs whenever each is
/// available.
#[derive(Clone, Debug)]
pub struct Buff {
    effects: [BuffEffect; 5],
}

impl Buff {
    pub const NAME: &'static str = "Buff";

    const MACRO_UP: Duration = Duration::from_secs(4);

    /// `macro_cooldown` gates the buff macro. The class buffs have fixed
    /// cooldowns.
    pub fn new(macro_cooldown: Duration) -> Self {
        let buff_macro = BuffEffect {
            name: "buff macro",
            key: Key::LShift,
            repetitions: 1,
            timing: PressTiming::default().with_up(Self::MACRO_UP),
            cooldown: Cooldown::new(macro_cooldown),
        };
        Self {
            effects: [
                buff_macro,
                BuffEffect::new("burning soul blade", Key::R, Duration::from_secs(120)),
                BuffEffect::new("epic adventurer", Key::Two, Duration::from_secs(120)),
                BuffEffect::new("cry valhalla", Key::Three, Duration::from_secs(150)),
                BuffEffect::new("instinctual combo", Key::Four, Duration::from_secs(240)),
            ],
        }
    }

    /// When the named effect last fired, if ever.
    pub fn last_fired(&self, effect: &str) -> Option<Duration> {
        self.effects
            .iter()
            .find(|e| e.name == effect)
            .and_then(|e| e.cooldown.last_fired())
    }
}

impl Default for Buff {
    fn default() -> Self {
        Self::new(Settings::DEFAULT_BUFF_COOLDOWN)
    }
}

impl Command for Buff {
    fn execute(&mut self, env: &Env<'_>) {
        tracing::info!("buffing");

        // One reading for the whole pass: presses take time, but every effect
        // is judged against the moment the pass started.
        let now = env.now();
        for effect in &mut self.effects {
            if effect.cooldown.try_fire(now) {
                tracing::debug!(effect = effect.name, "casting");
                env.press_with(effect.key, effect.repetitions, effect.timing);
            }
        }
    }

    fn info(&self) -> CommandInfo {
        CommandInfo::new(Self::NAME)
    }
}
