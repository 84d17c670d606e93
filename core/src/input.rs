/*
 * SPDX-FileCopyrightText: 2026 Taskboard Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use super::consts::*;

pub fn port_in_range(s: &str) -> Result<u16, String> {
    let port: usize = s
        .parse()
        .map_err(|_| format!("`{s}` is not a port number"))?;

    if PORT_RANGE.contains(&port) {
        Ok(port as u16)
    } else {
        Err(format!(
            "port not in range {}-{}",
            PORT_RANGE.start(),
            PORT_RANGE.end()
        ))
    }
}

pub fn check_length(field: &str, value: &str, max: usize) -> Result<(), String> {
    if value.chars().count() > max {
        Err(format!("{} cannot exceed {} characters", field, max))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn port_in_range_accepts_valid_ports() {
        assert_eq!(port_in_range("1"), Ok(1));
        assert_eq!(port_in_range("3000"), Ok(3000));
        assert_eq!(port_in_range("65535"), Ok(65535));
    }

    #[test]
    fn port_in_range_rejects_invalid_input() {
        assert!(port_in_range("0").is_err());
        assert!(port_in_range("65536").is_err());
        assert!(port_in_range("not-a-port").is_err());
    }

    #[test]
    fn check_length_enforces_maximum() {
        assert!(check_length("name", "launch", MAX_PROJECT_NAME_LEN).is_ok());
        assert!(check_length("name", &"x".repeat(81), MAX_PROJECT_NAME_LEN).is_err());
        assert!(check_length("severity", "high", MAX_TASK_SEVERITY_LEN).is_ok());
        assert!(check_length("severity", "catastrophical", MAX_TASK_SEVERITY_LEN).is_err());
    }
}
