//! # Suite Selection Module / 套件选择模块
//!
//! Reconciles the requested run/skip lists against the suites actually on
//! disk. The result is three pairwise-disjoint sets: what to run, what was
//! present but skipped, and what was requested but does not exist.
//!
//! 将请求的运行/跳过列表与磁盘上实际存在的套件进行核对。
//! 结果是三个两两不相交的集合：要运行的、存在但被跳过的、
//! 以及被请求但不存在的。

use rand::Rng;
use rand::seq::SliceRandom;

/// The selector's verdict for one invocation. Computed once; never
/// recomputed mid-run.
///
/// 选择器对一次调用的裁定。只计算一次，运行中不会重新计算。
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Suites to execute, already in their final order.
    /// 要执行的套件，顺序已定。
    pub to_run: Vec<String>,
    /// Suites present on disk but excluded from this run.
    /// 磁盘上存在但本次运行被排除的套件。
    pub skipped: Vec<String>,
    /// Requested or excluded names with no matching executable on disk.
    /// 被请求或排除、但磁盘上没有对应可执行文件的名称。
    pub not_found: Vec<String>,
}

/// Computes the selection for one run.
///
/// A non-empty `include` list takes exclusive precedence: `exclude` is then
/// ignored entirely, by design. In include mode the run order follows the
/// include list (duplicates dropped), optionally shuffled through the caller
/// supplied rng to surface order-dependent coupling between suites. In
/// exclude mode the run order is the inventory's directory order.
///
/// An empty `to_run` is a valid outcome and not an error.
///
/// 计算一次运行的选择结果。
///
/// 非空的 `include` 列表拥有排他优先权：此时 `exclude` 被完全忽略，
/// 这是有意为之。include 模式下运行顺序跟随 include 列表（去除重复项），
/// 并可通过调用者提供的随机数发生器打乱，以暴露套件间依赖顺序的耦合。
/// exclude 模式下运行顺序为清单的目录顺序。
pub fn select<R: Rng>(
    inventory: &[String],
    include: &[String],
    exclude: &[String],
    shuffle: bool,
    rng: &mut R,
) -> Selection {
    let on_disk = |name: &String| inventory.contains(name);

    if !include.is_empty() {
        let mut to_run = distinct(include.iter().filter(|n| on_disk(n)));
        if shuffle {
            to_run.shuffle(rng);
        }

        let not_found = distinct(include.iter().filter(|n| !on_disk(n)));

        Selection {
            to_run,
            skipped: Vec::new(),
            not_found,
        }
    } else {
        let skipped = distinct(exclude.iter().filter(|n| on_disk(n)));
        let not_found = distinct(exclude.iter().filter(|n| !on_disk(n)));
        let to_run = inventory
            .iter()
            .filter(|n| !skipped.contains(*n))
            .cloned()
            .collect();

        Selection {
            to_run,
            skipped,
            not_found,
        }
    }
}

/// Collects names in first-occurrence order, dropping repeats. The request
/// lists are sets; a name given twice means once.
///
/// 按首次出现的顺序收集名称并丢弃重复项。请求列表是集合；
/// 给出两次的名称只算一次。
fn distinct<'a, I>(names: I) -> Vec<String>
where
    I: Iterator<Item = &'a String>,
{
    let mut collected: Vec<String> = Vec::new();
    for name in names {
        if !collected.contains(name) {
            collected.push(name.clone());
        }
    }
    collected
}
