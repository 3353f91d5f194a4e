//! Virtual time for driving a [`Portfolio`] in tests.
//!
//! Timers are armed and cancelled the way the view's effects do it: a request
//! that is unchanged after a message keeps its original deadline, a changed
//! or withdrawn request cancels the pending timer.

use crate::contact::ContactForm;
use crate::portfolio::{Msg, Portfolio, Reveal, TimerRequest};

struct Armed {
    due: u64,
    request: TimerRequest,
}

pub struct VirtualClock {
    now: u64,
    armed: Vec<Armed>,
}

impl VirtualClock {
    pub fn mount(portfolio: &Portfolio) -> Self {
        let mut clock = Self {
            now: 0,
            armed: Vec::new(),
        };
        clock.sync(portfolio);
        clock
    }

    pub fn dispatch(&mut self, portfolio: &mut Portfolio, msg: Msg) -> Option<ContactForm> {
        let submitted = portfolio.update(msg);
        self.sync(portfolio);
        submitted
    }

    /// Fires every timer due within the next `millis`, in deadline order.
    pub fn advance(&mut self, portfolio: &mut Portfolio, millis: u64) {
        let target = self.now + millis;

        loop {
            let next = self
                .armed
                .iter()
                .enumerate()
                .filter(|(_, armed)| armed.due <= target)
                .min_by_key(|(_, armed)| armed.due)
                .map(|(index, _)| index);

            let Some(index) = next else {
                break;
            };

            let fired = self.armed.remove(index);
            self.now = fired.due;
            portfolio.update(fired.request.tick());
            self.sync(portfolio);
        }

        self.now = target;
    }

    pub fn armed_list_timers(&self) -> usize {
        self.armed
            .iter()
            .filter(|armed| armed.request.reveal != Reveal::Intro)
            .count()
    }

    fn sync(&mut self, portfolio: &Portfolio) {
        let wanted: Vec<TimerRequest> = [portfolio.intro_timer(), portfolio.list_timer()]
            .into_iter()
            .flatten()
            .collect();

        self.armed.retain(|armed| wanted.contains(&armed.request));

        for request in wanted {
            if !self.armed.iter().any(|armed| armed.request == request) {
                self.armed.push(Armed {
                    due: self.now + u64::from(request.delay_ms),
                    request,
                });
            }
        }
    }
}
