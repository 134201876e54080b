//! idchars crash handler
use std::{io::Write, panic::PanicHookInfo, process::exit, sync::atomic};

use backtrace::Backtrace;

const BUG_REPORT_MSG: &str = "This is a bug in the generator, please file a bug report including";
const BUG_REPORT_HINT: &str = "the output above and the version printed by `idchars --version`";

/// The idchars crash handler. It prints the panic message, the location of
/// the panic, a backtrace, and a hint about reporting the bug, then exits
/// with status `1`.
///
/// # Registering the handler
/// ```ignore
/// use std::panic;
/// use idchars_utils::crash::crash_handler;
///
/// panic::set_hook(Box::new(crash_handler));
/// ```
pub fn crash_handler(info: &PanicHookInfo) {
    static PANIC_ONCE: atomic::AtomicBool = atomic::AtomicBool::new(false);

    if !PANIC_ONCE.swap(true, atomic::Ordering::SeqCst) {
        let stderr = std::io::stderr();
        let mut stderr = stderr.lock();

        let _ = write!(&mut stderr, "Sorry :^(\nInternal Generator Error");

        if let Some(s) = info.payload().downcast_ref::<&str>() {
            let _ = writeln!(&mut stderr, ": {s}\n");
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            let _ = writeln!(&mut stderr, ": {s}\n");
        } else {
            let _ = writeln!(&mut stderr, "\n");
        }

        if let Some(location) = info.location() {
            let _ = writeln!(
                &mut stderr,
                "Occurred at '{}:{}:{}'",
                location.file(),
                location.line(),
                location.column()
            );
        }

        let backtrace = Backtrace::new();
        let _ = writeln!(&mut stderr, "Backtrace:\n{backtrace:?}");

        let _ = writeln!(
            &mut stderr,
            "{}\n{:^len$}\n",
            BUG_REPORT_MSG,
            BUG_REPORT_HINT,
            len = BUG_REPORT_MSG.len()
        );
    }

    exit(1);
}
