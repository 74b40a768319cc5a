//! Adjacency rules of the chaos game.
//!
//! Rule `k` in `0..4`, when enabled, forbids jumping towards vertex
//! `(previous + k) mod n`. Enabled rules combine conjunctively.
//! Rule 4 ("allow midpoints") is carried along but does not change the choice.

use {
  crate::error::{Error, Result},
  super::MAX_ATTEMPTS,
  rand::Rng
};


pub const RULE_COUNT: usize = 5;
/// Rules that actually exclude a vertex.
pub const EXCLUSION_RULES: usize = 4;

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct RuleSet(pub [bool; RULE_COUNT]);

impl RuleSet {
  pub fn all() -> Self {
    Self([true; RULE_COUNT])
  }

  pub fn none() -> Self {
    Self([false; RULE_COUNT])
  }

  /// Five independent fair coin flips.
  pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
    let mut rules = [false; RULE_COUNT];
    rules.iter_mut().for_each(|rule| *rule = rng.gen_bool(0.5));
    Self(rules)
  }

  pub fn is_enabled(&self, rule: usize) -> bool {
    self.0.get(rule).copied().unwrap_or(false)
  }

  /// Placeholder, has no effect on vertex choice.
  pub fn allows_midpoints(&self) -> bool {
    self.0[4]
  }

  /// Whether jumping to `index` after `prev` breaks an enabled rule, for an `n`-gon.
  pub fn forbids(&self, prev: usize, index: usize, n: usize) -> bool {
    (0..EXCLUSION_RULES)
      .filter(|&k| self.0[k])
      .any(|k| index == (prev + k) % n)
  }

  /// Vertices allowed after `prev`.
  pub fn allowed(&self, prev: usize, n: usize) -> impl Iterator<Item = usize> + '_ {
    (0..n).filter(move |&index| !self.forbids(prev, index, n))
  }

  /// True when the enabled rules exclude every vertex of an `n`-gon.
  /// Exclusions are relative to the previous vertex, so the answer does not depend on it.
  pub fn is_degenerate(&self, n: usize) -> bool {
    self.allowed(0, n).next().is_none()
  }
}

impl std::fmt::Display for RuleSet {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    self.0.iter()
      .try_for_each(|&rule| f.write_str(if rule { "1" } else { "0" }))
  }
}

/// What to do once the retry cap is hit.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
  /// Fall back to an unconstrained uniform draw.
  #[default]
  Unconstrained,
  /// Report [`Error::DegenerateRuleSet`].
  Fail
}

/// Draws uniformly random vertices until one satisfies every enabled rule.
pub fn draw_constrained<R: Rng + ?Sized>(
  n: usize,
  prev: usize,
  rules: &RuleSet,
  max_attempts: usize,
  rng: &mut R
) -> Result<usize> {
  if prev >= n {
    return Err(Error::OutOfRange { index: prev, len: n });
  }
  (0..max_attempts)
    .map(|_| rng.gen_range(0..n))
    .find(|&index| !rules.forbids(prev, index, n))
    .ok_or(Error::DegenerateRuleSet { attempts: max_attempts })
}

/// Adjacency rule filter of a single chaos game.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RuleFilter {
  pub rules: RuleSet,
  /// Triangle mode, all rules bypassed.
  pub override_mode: bool,
  pub max_attempts: usize,
  pub policy: DegeneratePolicy
}

impl RuleFilter {
  pub fn new(rules: RuleSet, override_mode: bool) -> Self {
    Self {
      rules,
      override_mode,
      max_attempts: MAX_ATTEMPTS,
      policy: DegeneratePolicy::default()
    }
  }

  pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
    self.max_attempts = max_attempts;
    self
  }

  pub fn with_policy(mut self, policy: DegeneratePolicy) -> Self {
    self.policy = policy;
    self
  }

  /// Index of the next vertex of an `n`-gon, given the previous choice.
  pub fn choose_next<R: Rng + ?Sized>(&self, n: usize, prev: usize, rng: &mut R) -> Result<usize> {
    if prev >= n {
      return Err(Error::OutOfRange { index: prev, len: n });
    }
    let unconstrained = self.policy == DegeneratePolicy::Unconstrained;
    if self.override_mode || (unconstrained && self.rules.is_degenerate(n)) {
      return Ok(rng.gen_range(0..n));
    }
    match draw_constrained(n, prev, &self.rules, self.max_attempts, rng) {
      Err(Error::DegenerateRuleSet { attempts }) if unconstrained => {
        tracing::warn!(rules = %self.rules, n, attempts, "degenerate rule set, choosing freely");
        Ok(rng.gen_range(0..n))
      }
      result => result
    }
  }
}

/// [`RuleFilter::choose_next`] with the default retry cap and fallback.
pub fn choose_next<R: Rng + ?Sized>(
  n: usize,
  prev: usize,
  rules: &RuleSet,
  override_mode: bool,
  rng: &mut R
) -> Result<usize> {
  RuleFilter::new(*rules, override_mode).choose_next(n, prev, rng)
}
