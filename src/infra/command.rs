//! # Child Process Capture Module / 子进程捕获模块
//!
//! Spawns a suite executable and captures everything it writes to stdout
//! and stderr. The orchestrator owns the child's whole lifetime: the wait
//! is unbounded, and the combined output is handed back for appending to
//! the run log.
//!
//! 启动套件可执行文件并捕获其写入 stdout 和 stderr 的全部内容。
//! 编排器拥有子进程的完整生命周期：等待没有超时限制，
//! 合并后的输出被交回以追加到运行日志。

use tokio::io::{AsyncRead, AsyncReadExt};

/// Spawns a command, waits for it to exit and captures its output.
///
/// The two streams are drained by concurrent tasks so a chatty child can
/// never dead-lock on a full pipe. Stdout and stderr are returned as one
/// string, stdout first. Test executables are free to emit arbitrary
/// bytes; invalid UTF-8 is carried into the log lossily instead of being
/// dropped.
///
/// # Returns
/// A tuple containing:
/// - The `ExitStatus` of the process wrapped in an `io::Result`.
/// - The combined stdout and stderr as a `String`.
///
/// 启动一个命令，等待其退出并捕获输出。
/// 两个流由并发任务排空，因此输出繁多的子进程不会因管道写满而死锁。
/// stdout 与 stderr 合并为一个字符串返回，stdout 在前。
pub async fn spawn_and_capture(
    mut cmd: tokio::process::Command,
) -> (std::io::Result<std::process::ExitStatus>, String) {
    let mut child = match cmd
        .stdout(std::process::Stdio::piped())
        .stderr(std::process::Stdio::piped())
        .spawn()
    {
        Ok(child) => child,
        Err(e) => {
            // Nothing ran, so there is no output to report.
            // 没有任何东西运行，因此没有输出可报告。
            return (Err(e), String::new());
        }
    };

    // Pipes were requested above, so both handles are present.
    // 上面已请求管道，因此两个句柄都存在。
    let stdout = child.stdout.take();
    let stderr = child.stderr.take();

    let stdout_task = tokio::spawn(drain(stdout));
    let stderr_task = tokio::spawn(drain(stderr));

    let status = child.wait().await;

    // Join the readers after the child exits so no trailing output is lost.
    // 子进程退出后再合并读取任务，确保不丢失末尾输出。
    let mut output = stdout_task.await.unwrap_or_default();
    output.push_str(&stderr_task.await.unwrap_or_default());

    (status, output)
}

/// Reads a stream to EOF as raw bytes. The pipe is held open for the
/// child's whole lifetime, and non-UTF-8 output is replaced rather than
/// discarded.
///
/// 以原始字节读取流直到 EOF。管道在子进程的整个生命周期内保持打开，
/// 非 UTF-8 输出被替换而不是丢弃。
async fn drain<S: AsyncRead + Unpin + Send + 'static>(stream: Option<S>) -> String {
    let Some(mut stream) = stream else {
        return String::new();
    };

    let mut bytes = Vec::new();
    // Whatever was read before an error stays in the buffer.
    // 出错前已读取的内容保留在缓冲区中。
    let _ = stream.read_to_end(&mut bytes).await;
    String::from_utf8_lossy(&bytes).into_owned()
}
