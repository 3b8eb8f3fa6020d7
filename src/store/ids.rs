use std::collections::HashSet;

use crate::core::ProjectId;

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn to_base36(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push(ALPHABET[(n % 36) as usize]);
        n /= 36;
    }
    digits.reverse();
    String::from_utf8_lossy(&digits).into_owned()
}

/// Issues project ids that are never handed out twice, including ids of
/// records that have since been removed and ids that arrived from outside.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    next: u64,
    issued: HashSet<ProjectId>,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an id that entered the store without being generated here
    pub fn reserve(&mut self, id: &str) {
        self.issued.insert(id.to_string());
    }

    pub fn is_issued(&self, id: &str) -> bool {
        self.issued.contains(id)
    }

    pub fn next_id(&mut self) -> ProjectId {
        loop {
            self.next += 1;
            let candidate = format!("prj-{}", to_base36(self.next));
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
