use crate::adapters::devices::{DvdPlayer, Projector, SoundSystem};
use crate::adapters::payments::strategy_for;
use crate::config::DemoConfig;
use crate::core::facade::HomeTheatreFacade;
use crate::core::payment::PaymentContext;
use crate::core::Observer;
use crate::utils::error::{DemoError, Result};
use std::io::Write;
use std::sync::Arc;

pub fn run_facade_demo<W: Write + ?Sized>(
    config: &DemoConfig,
    observer: Arc<dyn Observer>,
    out: &mut W,
) -> Result<()> {
    tracing::info!("Starting Facade Pattern Demo");
    writeln!(out, "=== Facade Pattern Example: Home Theater System ===\n")?;

    let dvd = Arc::new(DvdPlayer::new(observer.clone()));
    let projector = Arc::new(Projector::new(observer.clone()));
    let sound = Arc::new(SoundSystem::new(observer.clone()));

    let theatre = HomeTheatreFacade::new(dvd.clone(), projector.clone(), sound.clone(), observer)
        .with_movie_volume(config.movie_volume());

    writeln!(out, "Starting movie experience...")?;
    theatre.watch_movie();
    tracing::debug!(
        volume = sound.volume(),
        projector_on = projector.is_on(),
        playing = dvd.is_playing(),
        "Home theatre ready"
    );

    writeln!(out, "\nEnding movie experience...")?;
    theatre.end_movie();

    writeln!(out, "\n=== Facade Pattern Example Complete ===\n")?;
    Ok(())
}

pub fn run_strategy_demo<W: Write + ?Sized>(
    config: &DemoConfig,
    observer: Arc<dyn Observer>,
    out: &mut W,
) -> Result<()> {
    tracing::info!("Starting Strategy Pattern Demo");
    writeln!(out, "=== Strategy Pattern Example: Payment System ===\n")?;

    let mut steps = config.payments.iter();
    let first = steps.next().ok_or_else(|| DemoError::InvalidConfigValueError {
        field: "payments".to_string(),
        value: "[]".to_string(),
        reason: "At least one entry is required".to_string(),
    })?;

    let mut active = first.method;
    let mut context = PaymentContext::new(strategy_for(active, observer.clone()), observer.clone());

    writeln!(out, "Processing payments with different strategies:")?;
    writeln!(out, "{}", "-".repeat(50))?;

    context.make_payment(first.amount)?;
    for step in steps {
        if step.method != active {
            context.set_strategy(strategy_for(step.method, observer.clone()));
            active = step.method;
        }
        context.make_payment(step.amount)?;
    }

    writeln!(out, "\n=== Strategy Pattern Example Complete ===\n")?;
    Ok(())
}

pub fn run_all<W: Write + ?Sized>(
    config: &DemoConfig,
    observer: Arc<dyn Observer>,
    out: &mut W,
) -> Result<()> {
    tracing::info!("Running all pattern examples");
    run_facade_demo(config, observer.clone(), out)?;
    run_strategy_demo(config, observer, out)
}
