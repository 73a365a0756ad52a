use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::Path;
use std::time::{SystemTime, SystemTimeError, UNIX_EPOCH};

// The output is wrapped in a Result to allow matching on errors
// Returns an Iterator to the Reader of the lines of the file.
pub fn read_lines<P>(filename: P) -> io::Result<io::Lines<io::BufReader<File>>>
where
    P: AsRef<Path>,
{
    let file = File::open(filename)?;
    Ok(io::BufReader::new(file).lines())
}

/// Returns the current UNIX time in milliseconds
pub fn get_time_ms() -> Result<f64, SystemTimeError> {
    Ok(SystemTime::now().duration_since(UNIX_EPOCH)?.as_nanos() as f64 * 1e-6)
}

/// Returns the result of `f` and how long executing it took in ms
pub fn time_execution<F>(f: F) -> Result<(bool, f64), SystemTimeError>
where
    F: FnOnce() -> bool,
{
    let start_ms = get_time_ms()?;
    let found = f();
    let end_ms = get_time_ms()?;
    Ok((found, end_ms - start_ms))
}
