use soroban_sdk::{Env, IntoVal, String, Val};

/// Sink for the contract's diagnostic messages.
pub trait ContractLogger {
    /// Records `message` together with the id or function name it concerns.
    fn log(&self, message: &'static str, subject: &str);
}

/// Writes to the host's diagnostic log. Release builds without debug
/// assertions drop these entries.
pub struct EnvLogger<'a> {
    env: &'a Env,
}

impl<'a> EnvLogger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl ContractLogger for EnvLogger<'_> {
    fn log(&self, message: &'static str, subject: &str) {
        let subject: Val = String::from_str(self.env, subject).into_val(self.env);
        self.env.logs().add(message, &[subject]);
    }
}

/// Discards every message.
pub struct NoopLogger;

impl ContractLogger for NoopLogger {
    fn log(&self, _message: &'static str, _subject: &str) {}
}
