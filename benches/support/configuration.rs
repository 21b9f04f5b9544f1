use std::{env, error};

#[derive(Debug, Clone)]
pub struct Configuration {
    iterations: usize,
    input: String,
    log_interval: usize,
}

fn var(key: &str, default: Option<String>) -> Result<String, String> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(_) => default.ok_or(format!("Missing {}", key)),
    }
}

fn var_map<T, E: error::Error>(key: &str, mut f: impl FnMut(&str) -> Result<T, E>, default: Option<T>) -> Result<T, String> {
    match var(key, None) {
        Ok(value) => f(&value).map_err(|err| format!("Invalid {} {} ({})", key, value, err)),
        Err(err) => default.ok_or(err),
    }
}

impl Configuration {
    pub fn new() -> Result<Self, String> {
        let iterations = var_map("CCSID37_BENCH_ITERATIONS", |iterations| iterations.parse(), Some(100_000))?;
        let input = var("CCSID37_BENCH_INPUT", Some(String::from("HELLO WORLD")))?;
        let log_interval = var_map("CCSID37_BENCH_LOG_INTERVAL", |interval| interval.parse(), Some(25_000))?;
        Ok(Self {
            iterations,
            input,
            log_interval,
        })
    }

    pub fn iterations(&self) -> usize {
        self.iterations
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn log_interval(&self) -> usize {
        self.log_interval
    }
}
