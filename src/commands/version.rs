//! Version command.

use crate::config::APP_VERSION;
use crate::errors::AppResult;

pub fn execute() -> AppResult<()> {
    println!("{}", banner());
    Ok(())
}

fn banner() -> String {
    format!("Application Version {}", APP_VERSION)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner() {
        assert_eq!(banner(), format!("Application Version {}", env!("CARGO_PKG_VERSION")));
    }
}
