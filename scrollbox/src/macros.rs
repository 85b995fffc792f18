#[cfg(feature = "tracing")]
macro_rules! sbtrace {
    ($($tt:tt)*) => {
        tracing::trace!(target: "scrollbox", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sbtrace {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sbdebug {
    ($($tt:tt)*) => {
        tracing::debug!(target: "scrollbox", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sbdebug {
    ($($tt:tt)*) => {};
}

#[cfg(feature = "tracing")]
macro_rules! sbwarn {
    ($($tt:tt)*) => {
        tracing::warn!(target: "scrollbox", $($tt)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! sbwarn {
    ($($tt:tt)*) => {};
}
