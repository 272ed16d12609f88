//! # Auxiliary Test Server Module / 辅助测试服务器模块
//!
//! A minimal background HTTP responder that exists only so the designated
//! suite finds a live server on the pre-agreed port while it runs. It is
//! started right before that suite launches and shut down right after the
//! suite exits, through a `GET /kill` request on the same port.
//!
//! 一个极简的后台 HTTP 响应器，存在的唯一目的是让指定套件在运行期间
//! 能在预定端口上找到一个存活的服务器。它在该套件启动前开启，
//! 套件退出后立即通过同一端口上的 `GET /kill` 请求关闭。

use crate::infra::t;
use colored::*;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

/// How long the shutdown request may take before it is written off.
/// 关闭请求在被放弃之前允许花费的时间。
const STOP_TIMEOUT: Duration = Duration::from_secs(5);

/// The observed fate of a `stop` call. Never escalated into a failure of
/// the test run; the designated suite's own exit code stays authoritative.
///
/// 一次 `stop` 调用的观测结果。绝不会升级为测试运行的失败；
/// 指定套件自身的退出码始终是权威结果。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// The server answered the kill request and is going away.
    Acknowledged,
    /// The server did not answer within the timeout.
    TimedOut,
    /// No connection could be made to the port at all.
    Unreachable,
}

/// Starts the server on `port` and returns once the port is bound; all
/// serving happens in a background task.
///
/// A bind failure is a background fault: it is reported on stderr but not
/// surfaced to the caller, matching the fire-and-forget contract of the
/// controller. The task serves until it sees a `GET /kill` request.
///
/// 在 `port` 上启动服务器，端口绑定完成后即返回；所有服务都在后台任务中进行。
/// 绑定失败属于后台故障：只在 stderr 上报告，不向调用者抛出，
/// 与控制器即发即弃的约定一致。任务持续服务直到收到 `GET /kill` 请求。
pub async fn start(port: u16) {
    println!("{}", t!("run.server_starting", port = port).cyan());

    let listener = match TcpListener::bind(("127.0.0.1", port)).await {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!(
                "{}",
                t!("run.server_bind_failed", port = port, error = e).red()
            );
            return;
        }
    };

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((stream, _)) => {
                    if serve_connection(stream).await {
                        break;
                    }
                }
                Err(e) => {
                    // A dead listener cannot be waited out; give up rather
                    // than spin. The next stop() will report Unreachable.
                    // 失效的监听器无法等待恢复；放弃而不是空转。
                    // 下一次 stop() 会报告 Unreachable。
                    eprintln!(
                        "{}",
                        t!("run.server_accept_failed", error = e).yellow()
                    );
                    break;
                }
            }
        }
    });
}

/// Answers one connection. Returns `true` when the request asked the
/// server to die.
async fn serve_connection(mut stream: TcpStream) -> bool {
    let mut buf = [0u8; 1024];
    let read = match stream.read(&mut buf).await {
        Ok(n) => n,
        Err(_) => return false,
    };
    let request = String::from_utf8_lossy(&buf[..read]);
    let kill = request.lines().next().is_some_and(|line| {
        line.starts_with("GET /kill ") || line.starts_with("GET /kill\r") || line == "GET /kill"
    });

    let body = if kill { "bye" } else { "ok" };
    let response = format!(
        "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        body.len(),
        body
    );
    // The peer may already be gone; that is fine either way.
    // 对端可能已经断开，这无论如何都没有问题。
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;

    kill
}

/// Asks the server on `port` to shut down, waiting at most `STOP_TIMEOUT`.
///
/// The outcome is reported, never propagated: a stuck server must not keep
/// the run from reaching its summary.
///
/// 请求 `port` 上的服务器关闭，最多等待 `STOP_TIMEOUT`。
/// 结果只报告、不传播：卡住的服务器不能阻止运行产出摘要。
pub async fn stop(port: u16) -> ShutdownOutcome {
    let request = async {
        let mut stream = match TcpStream::connect(("127.0.0.1", port)).await {
            Ok(stream) => stream,
            Err(_) => return ShutdownOutcome::Unreachable,
        };
        let kill = format!("GET /kill HTTP/1.1\r\nHost: 127.0.0.1:{port}\r\nConnection: close\r\n\r\n");
        if stream.write_all(kill.as_bytes()).await.is_err() {
            return ShutdownOutcome::Unreachable;
        }
        let mut response = Vec::new();
        match stream.read_to_end(&mut response).await {
            Ok(_) => ShutdownOutcome::Acknowledged,
            Err(_) => ShutdownOutcome::Unreachable,
        }
    };

    let outcome = match tokio::time::timeout(STOP_TIMEOUT, request).await {
        Ok(outcome) => outcome,
        Err(_) => ShutdownOutcome::TimedOut,
    };

    match outcome {
        ShutdownOutcome::Acknowledged => {
            println!("{}", t!("run.server_stopped").cyan());
        }
        ShutdownOutcome::TimedOut | ShutdownOutcome::Unreachable => {
            println!("{}", t!("run.server_stop_failed").yellow());
        }
    }

    outcome
}
