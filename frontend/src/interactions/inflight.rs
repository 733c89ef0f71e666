use super::error::SubmitError;

/// Token handed out when a simulated request starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

/// Tracks the one request a form may have outstanding.
///
/// A completion only counts if it presents the live ticket; anything else is
/// stale (cancelled or superseded) and gets dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InFlight {
    issued: u64,
    live: Option<Ticket>,
}

impl InFlight {
    pub fn begin(&mut self) -> Result<Ticket, SubmitError> {
        if self.live.is_some() {
            return Err(SubmitError::AlreadyPending);
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.live = Some(ticket);
        Ok(ticket)
    }

    pub fn finish(&mut self, ticket: Ticket) -> bool {
        if self.live == Some(ticket) {
            self.live = None;
            true
        } else {
            false
        }
    }

    pub fn cancel(&mut self) -> Option<Ticket> {
        self.live.take()
    }

    pub fn is_pending(&self) -> bool {
        self.live.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_request_is_rejected_while_first_is_live() {
        let mut flight = InFlight::default();
        let ticket = flight.begin().unwrap();
        assert!(flight.is_pending());
        assert_eq!(flight.begin(), Err(SubmitError::AlreadyPending));
        assert!(flight.finish(ticket));
        assert!(!flight.is_pending());
        assert!(flight.begin().is_ok());
    }

    #[test]
    fn cancelled_ticket_cannot_finish() {
        let mut flight = InFlight::default();
        let old = flight.begin().unwrap();
        assert_eq!(flight.cancel(), Some(old));
        let new = flight.begin().unwrap();
        assert_ne!(old, new);
        assert!(!flight.finish(old));
        assert!(flight.is_pending());
        assert!(flight.finish(new));
        assert!(!flight.finish(new));
    }
}
