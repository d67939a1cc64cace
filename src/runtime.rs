pub type Receiver<T> = crossbeam_channel::Receiver<T>;
pub type Sender<T> = crossbeam_channel::Sender<T>;
pub type JoinHandle<T> = std::thread::JoinHandle<T>;
pub type WaitGroup = crossbeam_utils::sync::WaitGroup;

/// if none=> unbounded() channel,if Some =>  bounded(len) channel
pub fn chan<T>(len: Option<usize>) -> (Sender<T>, Receiver<T>) {
    match len {
        None => crossbeam_channel::unbounded(),
        Some(len) => crossbeam_channel::bounded(len),
    }
}

pub fn spawn<F>(name: &str, f: F) -> std::io::Result<JoinHandle<()>>
where
    F: FnOnce() + Send + 'static,
{
    std::thread::Builder::new().name(name.to_string()).spawn(f)
}
