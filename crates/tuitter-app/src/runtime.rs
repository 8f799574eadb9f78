//! Generic runtime for application orchestration.
//!
//! The Runtime drives the application event loop, coordinating between:
//! - [`App`]: UI state machine
//! - [`Bridge`]: Data-access bridge to a [`SocialApi`] provider
//! - [`Driver`]: Platform-specific I/O

use tuitter_core::SocialApi;

use crate::{App, AppAction, AppConfig, Bridge, Driver};

/// Generic runtime that orchestrates App, Bridge, and Driver.
///
/// # Type Parameters
///
/// - `D`: Platform-specific I/O driver
/// - `A`: Data provider behind the facade
pub struct Runtime<D, A>
where
    D: Driver,
    A: SocialApi,
{
    driver: D,
    app: App,
    bridge: Bridge<A>,
}

impl<D, A> Runtime<D, A>
where
    D: Driver,
    A: SocialApi,
{
    /// Create a new runtime with the given driver and provider.
    pub fn new(driver: D, api: A, config: AppConfig) -> Self {
        Self { driver, app: App::new(config), bridge: Bridge::new(api) }
    }

    /// Run the main event loop.
    ///
    /// This is the core orchestration loop that:
    /// 1. Loads the initial screen
    /// 2. Polls for input events from the driver
    /// 3. Processes actions and events between App and Bridge
    ///
    /// # Errors
    ///
    /// Returns an error if the driver encounters an I/O error.
    pub async fn run(&mut self) -> Result<(), D::Error> {
        let start = self.app.start();
        let mut should_quit = self.process_actions(start)?;

        while !should_quit {
            let actions = self.driver.poll_event(&mut self.app).await?;
            should_quit = self.process_actions(actions)?;
        }

        self.driver.stop();
        Ok(())
    }

    /// Process actions returned by the App.
    ///
    /// Data actions go through the bridge; the resulting events are fed back
    /// into the App until no actions remain. Returns `true` if should quit.
    fn process_actions(&mut self, initial_actions: Vec<AppAction>) -> Result<bool, D::Error> {
        let mut pending_actions = initial_actions;

        while !pending_actions.is_empty() {
            let actions = std::mem::take(&mut pending_actions);
            let mut needs_render = false;

            for action in actions {
                match action {
                    AppAction::Render => needs_render = true,
                    AppAction::Quit => return Ok(true),
                    data => {
                        let events = self.bridge.process_app_action(data);
                        for event in events {
                            let new_actions = self.app.handle(event);
                            pending_actions.extend(new_actions);
                        }
                    },
                }
            }

            if needs_render {
                self.driver.render(&self.app)?;
            }
        }
        Ok(false)
    }

    /// Get a reference to the App
    pub fn app(&self) -> &App {
        &self.app
    }

    /// Get a reference to the Driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Get a reference to the Bridge
    pub fn bridge(&self) -> &Bridge<A> {
        &self.bridge
    }
}
