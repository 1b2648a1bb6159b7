#[cfg(feature = "fern")]
pub fn init_logger(
    min_level: log::LevelFilter, log_file_name: &std::ffi::OsStr,
) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            // UTC rather than local time, since local offsets can't be read
            // reliably once threads exist.
            let now = time::OffsetDateTime::now_utc();

            out.finish(format_args!(
                "{} [{}] {}: {}",
                now.format(&time::macros::format_description!(
                    "[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]"
                ))
                .unwrap(),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(min_level)
        .chain(fern::log_file(log_file_name)?)
        .apply()?;

    Ok(())
}
