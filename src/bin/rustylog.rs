//! Demo binary: several threads log concurrently through the shared logger,
//! then the file is read back one level at a time.

use rustylog::{
    config::DEFAULT_CONFIG_PATH,
    log::{LogLevel, LogReader, logger},
};
use std::{env, process, thread, time::Duration};

const WORKERS: usize = 3;
const ITERATIONS: usize = 4;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config_path = args.get(1).map_or(DEFAULT_CONFIG_PATH, String::as_str);

    let shared = logger::instance_from(config_path);
    shared.set_level(LogLevel::Info);

    let mut handles = Vec::with_capacity(WORKERS);
    for id in 1..=WORKERS {
        let spawned = thread::Builder::new()
            .name(format!("worker-{id}"))
            .spawn(move || {
                let logger = logger::instance();
                for j in 0..ITERATIONS {
                    logger.append(&format!("message {j} from thread {id}"), LogLevel::Info);
                    if j == 1 {
                        logger.append(
                            &format!("message {j} warning from thread {id}"),
                            LogLevel::Warning,
                        );
                    }
                    if j == 2 {
                        logger.append(
                            &format!("message {j} error from thread {id}"),
                            LogLevel::Error,
                        );
                    }
                    thread::sleep(Duration::from_millis(100));
                }
            });
        match spawned {
            Ok(h) => handles.push(h),
            Err(e) => eprintln!("failed to spawn worker {id}: {e}"),
        }
    }

    for h in handles {
        if h.join().is_err() {
            eprintln!("a worker thread panicked");
        }
    }

    let reader = LogReader::new(shared.file_path());
    for level in LogLevel::ALL {
        println!("{level} logs:");
        match reader.read_logs(level) {
            Ok(lines) => lines.iter().for_each(|l| println!("{l}")),
            Err(e) => {
                eprintln!("Error reading logs: {e}");
                process::exit(1);
            }
        }
    }
}
