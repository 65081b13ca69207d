/// Inline-style entrance for elements whose resting offset depends on runtime
/// state (scroll direction, row parity). Pair with the `motion` class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entrance {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Default for Entrance {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            scale: 1.0,
            duration: 0.6,
            delay: 0.0,
        }
    }
}

impl Entrance {
    pub fn style(&self, visible: bool) -> String {
        let timing = format!(
            "transition-duration: {}s; transition-delay: {}s;",
            self.duration, self.delay
        );
        if visible {
            format!("opacity: 1; transform: none; {}", timing)
        } else {
            format!(
                "opacity: 0; transform: translate({}px, {}px) scale({}); {}",
                self.x, self.y, self.scale, timing
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_style_carries_offset() {
        let entrance = Entrance {
            y: 80.0,
            scale: 0.9,
            delay: 0.3,
            ..Entrance::default()
        };
        assert_eq!(
            entrance.style(false),
            "opacity: 0; transform: translate(0px, 80px) scale(0.9); transition-duration: 0.6s; transition-delay: 0.3s;"
        );
    }

    #[test]
    fn visible_style_rests_in_place() {
        let entrance = Entrance {
            x: -60.0,
            ..Entrance::default()
        };
        assert_eq!(
            entrance.style(true),
            "opacity: 1; transform: none; transition-duration: 0.6s; transition-delay: 0s;"
        );
    }
}
