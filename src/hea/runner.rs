//! Hybrid evolutionary loop.
//!
//! [`initialize_population`] and [`step_generation`] are the two discrete
//! operations; [`Hea`] wraps them in a state object that an external driver
//! advances one call at a time, and [`HeaRunner`] drives it to the end.
//!
//! One generation:
//! selection (2 tournaments) → GPX crossover → TabuCol refinement →
//! replacement of the worst individual.

use rand::rngs::StdRng;
use rand::Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::AlgorithmParams;
use super::selection::tournament;
use super::types::{HeaStatus, Individual, Population, StepReport};
use crate::coloring::Coloring;
use crate::dsatur::color_greedy;
use crate::error::{ColoringError, Result};
use crate::gpx::gpx_crossover;
use crate::graph::Graph;
use crate::random::create_rng;
use crate::tabu::{TabuConfig, TabuMemory, TabuRunner};

/// Builds the initial population: `pop_size` copies of the DSATUR coloring,
/// each improved by an independent TabuCol call.
///
/// Every individual gets its own generator seeded from `rng`, drawn in
/// individual order, so the population depends only on `rng` (and is the
/// same with or without the `parallel` feature).
///
/// # Errors
///
/// [`ColoringError::InvalidParameter`] if `params` is invalid.
pub fn initialize_population<R: Rng>(
    graph: &Graph,
    params: &AlgorithmParams,
    rng: &mut R,
) -> Result<Population> {
    params.validate()?;
    let seed = color_greedy(graph, params.k)?;
    let config = params.tabu_config();
    let rng_seeds: Vec<u64> = (0..params.pop_size).map(|_| rng.random()).collect();

    let refine = |rng_seed: u64| -> Result<Individual> {
        let mut local_rng = create_rng(rng_seed);
        let result = TabuRunner::run(graph, params.k, &seed, &config, &mut local_rng)?;
        Ok(Individual {
            coloring: result.coloring,
            conflicts: result.conflicts,
        })
    };

    #[cfg(feature = "parallel")]
    let individuals = rng_seeds
        .par_iter()
        .map(|&s| refine(s))
        .collect::<Result<Vec<_>>>()?;
    #[cfg(not(feature = "parallel"))]
    let individuals = rng_seeds
        .iter()
        .map(|&s| refine(s))
        .collect::<Result<Vec<_>>>()?;

    let population = Population::new(individuals)
        .ok_or_else(|| ColoringError::invalid_parameter("pop_size must be at least 1"))?;
    log::info!(
        "hea: population of {} initialized, best {} conflicts",
        population.len(),
        population.best().conflicts
    );
    Ok(population)
}

/// Runs one generation on `population`.
///
/// The child replaces the worst individual only if it has strictly fewer
/// conflicts than the worst AND no individual already has exactly the
/// child's conflict count. The tracked best is updated whenever the child
/// beats it, inserted or not, so the best conflict count never increases.
///
/// Calling it on a population whose status is already terminal still runs a
/// generation; [`Hea`] is the guarded entry point.
///
/// # Errors
///
/// [`ColoringError::InvalidParameter`] if `params` is invalid or the
/// population does not color `graph`.
pub fn step_generation<R: Rng>(
    population: &mut Population,
    graph: &Graph,
    params: &AlgorithmParams,
    rng: &mut R,
) -> Result<StepReport> {
    let mut memory = TabuMemory::default();
    step_with_memory(population, graph, params, &params.tabu_config(), &mut memory, rng)
}

fn step_with_memory<R: Rng>(
    population: &mut Population,
    graph: &Graph,
    params: &AlgorithmParams,
    config: &TabuConfig,
    memory: &mut TabuMemory,
    rng: &mut R,
) -> Result<StepReport> {
    params.validate()?;
    let generation = population.generation + 1;
    let mut messages = Vec::with_capacity(3);

    let i1 = tournament(&population.individuals, params.tournament_size, rng)
        .ok_or_else(|| ColoringError::invalid_parameter("population is empty"))?;
    let i2 = tournament(&population.individuals, params.tournament_size, rng)
        .ok_or_else(|| ColoringError::invalid_parameter("population is empty"))?;
    let (p1, p2) = (&population.individuals[i1], &population.individuals[i2]);
    messages.push(format!(
        "generation {generation}: parents #{i1} ({} conflicts) and #{i2} ({} conflicts)",
        p1.conflicts, p2.conflicts
    ));

    let child_seed: Coloring = gpx_crossover(&p1.coloring, &p2.coloring, params.k, graph, rng)?;
    let refined = TabuRunner::run_with_memory(graph, params.k, &child_seed, config, memory, rng)?;
    let child = Individual {
        coloring: refined.coloring,
        conflicts: refined.conflicts,
    };

    let worst = population.worst_index();
    let worst_conflicts = population.individuals[worst].conflicts;
    let insert = if child.conflicts >= worst_conflicts {
        messages.push(format!(
            "child rejected: {} conflicts, worst individual #{worst} has {worst_conflicts}",
            child.conflicts
        ));
        false
    } else if population.has_conflict_count(child.conflicts) {
        messages.push(format!(
            "child rejected: an individual already has {} conflicts",
            child.conflicts
        ));
        false
    } else {
        messages.push(format!(
            "child with {} conflicts replaces individual #{worst} ({worst_conflicts} conflicts)",
            child.conflicts
        ));
        true
    };

    if child.conflicts < population.best.conflicts {
        messages.push(format!(
            "new best: {} conflicts (was {})",
            child.conflicts, population.best.conflicts
        ));
        population.best = child.clone();
    }
    if insert {
        population.individuals[worst] = child;
    }
    population.generation = generation;

    for message in &messages {
        log::debug!("{}", message);
    }

    Ok(StepReport {
        status: status_of(population, params),
        generation,
        best: population.best.clone(),
        messages,
    })
}

fn status_of(population: &Population, params: &AlgorithmParams) -> HeaStatus {
    if population.best.conflicts == 0 {
        HeaStatus::Converged
    } else if population.generation >= params.max_iter_hea {
        HeaStatus::Exhausted
    } else {
        HeaStatus::Iterating
    }
}

/// Hybrid evolutionary run driven one step at a time.
///
/// The first [`advance`](Hea::advance) builds the population; each later
/// call runs exactly one generation. Once the run is `Converged` or
/// `Exhausted`, `advance` does no work and repeats the final state. Stopping
/// early is just not calling `advance` again.
///
/// ```
/// use kcolor_hea::graph::Graph;
/// use kcolor_hea::hea::{AlgorithmParams, Hea};
/// use kcolor_hea::random::create_rng;
///
/// let g = Graph::with_vertex_count(4, &[(1, 2), (2, 3), (3, 4), (4, 1)]).unwrap();
/// let params = AlgorithmParams::new(2).with_pop_size(4).with_max_iter_tabu(50);
/// let mut hea = Hea::new(&g, params, create_rng(1)).unwrap();
/// loop {
///     let report = hea.advance().unwrap();
///     if report.is_terminal() {
///         assert_eq!(report.best.conflicts, 0);
///         break;
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Hea<'g, R: Rng> {
    graph: &'g Graph,
    params: AlgorithmParams,
    tabu_config: TabuConfig,
    rng: R,
    status: HeaStatus,
    population: Option<Population>,
    memory: TabuMemory,
}

impl<'g, R: Rng> Hea<'g, R> {
    /// Prepares a run; no work happens until the first `advance`.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if `params` is invalid.
    pub fn new(graph: &'g Graph, params: AlgorithmParams, rng: R) -> Result<Self> {
        params.validate()?;
        Ok(Self {
            graph,
            tabu_config: params.tabu_config(),
            params,
            rng,
            status: HeaStatus::Uninitialized,
            population: None,
            memory: TabuMemory::default(),
        })
    }

    /// Runs the next step: initialization first, then one generation per call.
    ///
    /// # Errors
    ///
    /// Propagates validation errors of the underlying operations.
    pub fn advance(&mut self) -> Result<StepReport> {
        let population = match self.population.as_mut() {
            Some(population) => population,
            None => return self.initialize(),
        };
        if self.status != HeaStatus::Iterating {
            return Ok(StepReport {
                status: self.status,
                generation: population.generation,
                best: population.best.clone(),
                messages: Vec::new(),
            });
        }

        let report = step_with_memory(
            population,
            self.graph,
            &self.params,
            &self.tabu_config,
            &mut self.memory,
            &mut self.rng,
        )?;
        self.status = report.status;
        match report.status {
            HeaStatus::Converged => {
                log::info!("hea: converged at generation {}", report.generation)
            }
            HeaStatus::Exhausted => log::info!(
                "hea: generation budget exhausted, best {} conflicts",
                report.best.conflicts
            ),
            _ => {}
        }
        Ok(report)
    }

    fn initialize(&mut self) -> Result<StepReport> {
        let population = initialize_population(self.graph, &self.params, &mut self.rng)?;
        self.status = status_of(&population, &self.params);
        let mut messages = vec![format!(
            "population of {} initialized, best {} conflicts",
            population.len(),
            population.best.conflicts
        )];
        if self.status == HeaStatus::Converged {
            log::info!("hea: converged during initialization");
            messages.push("converged during initialization".to_string());
        }
        let report = StepReport {
            status: self.status,
            generation: 0,
            best: population.best.clone(),
            messages,
        };
        self.population = Some(population);
        Ok(report)
    }

    /// current phase
    pub fn status(&self) -> HeaStatus {
        self.status
    }

    /// population, once initialized
    pub fn population(&self) -> Option<&Population> {
        self.population.as_ref()
    }

    /// best individual so far, once initialized
    pub fn best(&self) -> Option<&Individual> {
        self.population.as_ref().map(Population::best)
    }

    /// generations completed
    pub fn generation(&self) -> usize {
        self.population.as_ref().map_or(0, Population::generation)
    }

    /// parameters of the run
    pub fn params(&self) -> &AlgorithmParams {
        &self.params
    }

    /// consumes the run and returns its population
    pub fn into_population(self) -> Option<Population> {
        self.population
    }
}

/// Result of a complete hybrid evolutionary run.
#[derive(Debug, Clone)]
pub struct HeaResult {
    /// Best individual found.
    pub best: Individual,
    /// Generations executed.
    pub generations: usize,
    /// `Converged` or `Exhausted`.
    pub status: HeaStatus,
    /// Best conflict count after initialization and after each generation.
    pub conflict_history: Vec<usize>,
}

/// Runs [`Hea`] until it terminates.
pub struct HeaRunner;

impl HeaRunner {
    /// Runs with a generator seeded from `params.seed` (random when `None`).
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if `params` is invalid.
    pub fn run(graph: &Graph, params: &AlgorithmParams) -> Result<HeaResult> {
        let rng: StdRng = match params.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(graph, params, rng)
    }

    /// Runs with a caller-supplied generator.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if `params` is invalid.
    pub fn run_with_rng<R: Rng>(
        graph: &Graph,
        params: &AlgorithmParams,
        rng: R,
    ) -> Result<HeaResult> {
        let mut hea = Hea::new(graph, params.clone(), rng)?;
        let mut conflict_history = Vec::with_capacity(params.max_iter_hea + 1);
        loop {
            let report = hea.advance()?;
            conflict_history.push(report.best.conflicts);
            if report.is_terminal() {
                return Ok(HeaResult {
                    best: report.best,
                    generations: report.generation,
                    status: report.status,
                    conflict_history,
                });
            }
        }
    }
}
