use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Ok,
    Warning,
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Severity::Ok => "OK",
            Severity::Warning => "WARNING",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(label)
    }
}

/// A classified result with the message shown to the pilot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub topic: String,
    pub severity: Severity,
    pub message: String,
}

impl Advisory {
    pub fn new(topic: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            severity,
            message: message.into(),
        }
    }

    pub fn ok(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(topic, Severity::Ok, message)
    }

    pub fn warning(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(topic, Severity::Warning, message)
    }

    pub fn critical(topic: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(topic, Severity::Critical, message)
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity, self.topic, self.message)
    }
}

/// Which side of a threshold is the dangerous one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Polarity {
    /// Loads, forces: trouble grows with the value
    HigherIsWorse,
    /// Margins, reserves: trouble grows as the value falls
    LowerIsWorse,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Thresholds {
    pub label: &'static str,
    pub unit: &'static str,
    pub warning: f64,
    pub critical: f64,
    pub polarity: Polarity,
}

impl Thresholds {
    pub fn higher_is_worse(label: &'static str, unit: &'static str, warning: f64, critical: f64) -> Self {
        Self {
            label,
            unit,
            warning,
            critical,
            polarity: Polarity::HigherIsWorse,
        }
    }

    pub fn lower_is_worse(label: &'static str, unit: &'static str, warning: f64, critical: f64) -> Self {
        Self {
            label,
            unit,
            warning,
            critical,
            polarity: Polarity::LowerIsWorse,
        }
    }

    pub fn severity(&self, value: f64) -> Severity {
        match self.polarity {
            Polarity::HigherIsWorse => {
                if value >= self.critical {
                    Severity::Critical
                } else if value >= self.warning {
                    Severity::Warning
                } else {
                    Severity::Ok
                }
            }
            Polarity::LowerIsWorse => {
                if value < self.critical {
                    Severity::Critical
                } else if value < self.warning {
                    Severity::Warning
                } else {
                    Severity::Ok
                }
            }
        }
    }
}

/// Classify a value against a threshold policy
pub fn classify(value: f64, thresholds: &Thresholds) -> Advisory {
    let severity = thresholds.severity(value);
    let bound = match severity {
        Severity::Critical => format!("beyond the critical limit of {:.1}{}", thresholds.critical, thresholds.unit),
        Severity::Warning => format!("beyond the warning limit of {:.1}{}", thresholds.warning, thresholds.unit),
        Severity::Ok => "within limits".to_string(),
    };

    Advisory::new(
        thresholds.label,
        severity,
        format!("{:.1}{} is {}", value, thresholds.unit, bound),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_higher_is_worse_bands() {
        let t = Thresholds::higher_is_worse("Engine load", "%", 80.0, 100.0);
        assert_eq!(classify(50.0, &t).severity, Severity::Ok);
        assert_eq!(classify(80.0, &t).severity, Severity::Warning);
        assert_eq!(classify(99.9, &t).severity, Severity::Warning);
        assert_eq!(classify(100.0, &t).severity, Severity::Critical);
        assert_eq!(classify(f64::INFINITY, &t).severity, Severity::Critical);
    }

    #[test]
    fn test_lower_is_worse_bands() {
        let t = Thresholds::lower_is_worse("Docking margin", " T", 10.0, 0.0);
        assert_eq!(classify(-0.1, &t).severity, Severity::Critical);
        assert_eq!(classify(0.0, &t).severity, Severity::Warning);
        assert_eq!(classify(9.99, &t).severity, Severity::Warning);
        assert_eq!(classify(10.0, &t).severity, Severity::Ok);
    }

    #[test]
    fn test_message_carries_value() {
        let t = Thresholds::lower_is_worse("Docking margin", " T", 10.0, 0.0);
        let advisory = classify(-12.34, &t);
        assert_eq!(advisory.message, "-12.3 T is beyond the critical limit of 0.0 T");
        assert_eq!(
            advisory.to_string(),
            "[CRITICAL] Docking margin: -12.3 T is beyond the critical limit of 0.0 T"
        );
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::Warning);
        assert!(Severity::Warning > Severity::Ok);
    }
}
