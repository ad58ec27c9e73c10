//! The Hero command book.
//!
//! | Command | Parameters |
//! |---|---|
//! | `Move` | `x`, `y`, `max_steps` = 15 |
//! | `Adjust` | `x`, `y`, `max_steps` = 5 |
//! | `Jump` | `direction` |
//! | `HopAttack` | `button`, `direction`, `duration` (seconds) |
//! | `RagingBlows` | `direction`, `attacks`, `repetitions` |
//! | `Panic`, `Rupture` | `direction` |
//! | `Shout`, `Worldreaver`, `RisingRage`, `SwordIllusion`, `Buff` | none |
mod attacks;
mod movement;
mod skills;

pub use attacks::{HopAttack, Panic, RagingBlows, Rupture};
pub use movement::{Adjust, Jump, Move};
pub use skills::{
    Buff, GatedSkill, RISING_RAGE, SHOUT, SWORD_ILLUSION, SkillProfile, WORLDREAVER,
};

use pilot_core::params::{count, finite, non_negative};
use pilot_core::{Command, HorizontalDirection, Key, Settings, ValidationError};

use crate::args::Args;
use crate::book::CommandBook;

type Built = Result<Box<dyn Command>, ValidationError>;

/// Every Hero command, built with `settings`.
pub fn book(settings: Settings) -> CommandBook {
    CommandBook::new("hero")
        .with_settings(settings)
        .register(Move::NAME, build_move)
        .register(Adjust::NAME, build_adjust)
        .register(Jump::NAME, build_jump)
        .register(HopAttack::NAME, build_hop_attack)
        .register(RagingBlows::NAME, build_raging_blows)
        .register(Panic::NAME, build_panic)
        .register(Rupture::NAME, build_rupture)
        .register(SHOUT.name, build_shout)
        .register(WORLDREAVER.name, build_worldreaver)
        .register(RISING_RAGE.name, build_rising_rage)
        .register(SWORD_ILLUSION.name, build_sword_illusion)
        .register(Buff::NAME, build_buff)
}

fn build_move(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(Move::NAME, ["x", "y", "max_steps"])?;
    let mut command = Move::new(
        finite("x", bound.required("x")?)?,
        finite("y", bound.required("y")?)?,
    )?;
    if let Some(steps) = bound.optional("max_steps") {
        command = command.with_max_steps(count("max_steps", steps)?);
    }
    Ok(Box::new(command))
}

fn build_adjust(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(Adjust::NAME, ["x", "y", "max_steps"])?;
    let mut command = Adjust::new(
        finite("x", bound.required("x")?)?,
        finite("y", bound.required("y")?)?,
    )?;
    if let Some(steps) = bound.optional("max_steps") {
        command = command.with_max_steps(count("max_steps", steps)?);
    }
    Ok(Box::new(command))
}

fn build_jump(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(Jump::NAME, ["direction"])?;
    Ok(Box::new(Jump::parse(bound.required("direction")?)?))
}

fn build_hop_attack(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(HopAttack::NAME, ["button", "direction", "duration"])?;
    Ok(Box::new(HopAttack::new(
        Key::parse(bound.required("button")?)?,
        HorizontalDirection::parse(bound.required("direction")?)?,
        non_negative("duration", bound.required("duration")?)?,
    )?))
}

fn build_raging_blows(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(RagingBlows::NAME, ["direction", "attacks", "repetitions"])?;
    let direction = HorizontalDirection::parse(bound.required("direction")?)?;
    let attacks = count("attacks", bound.required("attacks")?)?;
    let repetitions = count("repetitions", bound.required("repetitions")?)?;
    Ok(Box::new(RagingBlows::new(direction, attacks, repetitions)))
}

fn build_panic(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(Panic::NAME, ["direction"])?;
    Ok(Box::new(Panic::new(HorizontalDirection::parse(
        bound.required("direction")?,
    )?)))
}

fn build_rupture(args: &Args, _settings: &Settings) -> Built {
    let bound = args.bind(Rupture::NAME, ["direction"])?;
    Ok(Box::new(Rupture::new(HorizontalDirection::parse(
        bound.required("direction")?,
    )?)))
}

fn gated(args: &Args, profile: &'static SkillProfile) -> Built {
    args.bind(profile.name, [])?;
    Ok(Box::new(GatedSkill::new(profile)))
}

fn build_shout(args: &Args, _settings: &Settings) -> Built {
    gated(args, &SHOUT)
}

fn build_worldreaver(args: &Args, _settings: &Settings) -> Built {
    gated(args, &WORLDREAVER)
}

fn build_rising_rage(args: &Args, _settings: &Settings) -> Built {
    gated(args, &RISING_RAGE)
}

fn build_sword_illusion(args: &Args, _settings: &Settings) -> Built {
    gated(args, &SWORD_ILLUSION)
}

fn build_buff(args: &Args, settings: &Settings) -> Built {
    args.bind(Buff::NAME, [])?;
    Ok(Box::new(Buff::new(settings.buff_cooldown)))
}
