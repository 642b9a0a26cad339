//! Notifier port — surfaces the outcome of a submission to the user.

use ledbridge_domain::outcome::SubmitOutcome;

/// Presents exactly one acknowledgment per submission.
pub trait Notifier {
    fn notify(&self, outcome: &SubmitOutcome);
}

impl<T: Notifier + ?Sized> Notifier for &T {
    fn notify(&self, outcome: &SubmitOutcome) {
        (**self).notify(outcome);
    }
}

impl<T: Notifier + ?Sized> Notifier for std::rc::Rc<T> {
    fn notify(&self, outcome: &SubmitOutcome) {
        (**self).notify(outcome);
    }
}
