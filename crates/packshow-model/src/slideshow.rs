use std::fs;
use std::path::Path;

use packshow_solver::{ConstraintOp, MipProblem, SolutionStatus, Solver};
use thiserror::Error;

use crate::parser::Parser;
use crate::photo::{Photo, Slide, SlideLayout};

#[derive(Error, Debug)]
pub enum SlideshowError {
    #[error("IO error: {0}")]
    Io(String),
    #[error("Parse error in {0}: {1}")]
    Parse(String, String),
}

/// Pair vertical photos two at a time, popping from the end of the list.
/// The pairing is arbitrary (it ignores tag similarity), and an odd
/// leftover photo is dropped.
pub fn pair_vertical(mut vertical: Vec<Photo>) -> Vec<Slide> {
    let mut slides = Vec::with_capacity(vertical.len() / 2);
    while vertical.len() > 1 {
        let first = vertical.pop().unwrap();
        let second = vertical.pop().unwrap();
        slides.push(Slide::pair(first, second));
    }
    slides
}

/// Turn a photo collection into slides: horizontal photos become single
/// slides in input order, vertical photos are paired, pairs follow the
/// singles.
pub fn assemble(photos: Vec<Photo>) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut vertical = Vec::new();
    for photo in photos {
        if photo.is_horizontal() {
            slides.push(Slide::single(photo));
        } else {
            vertical.push(photo);
        }
    }
    slides.extend(pair_vertical(vertical));
    slides
}

/// Outcome of the slide-selection solve.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone)]
pub struct SlideshowReport {
    pub status: SolutionStatus,
    /// Indices into the assembled slide list; empty when non-optimal
    pub selected: Vec<usize>,
}

impl SlideshowReport {
    pub fn selected_slides(&self, slides: &[Slide]) -> Vec<Slide> {
        self.selected.iter().map(|&i| slides[i].clone()).collect()
    }
}

/// Run the slide-selection program: one binary variable per slide,
/// maximize the number of selected slides, each variable bounded only by
/// its own unit upper bound. Nothing ever excludes a slide, so an optimal
/// solve selects every slide it is given.
///
/// TODO: replace the unit upper bounds with a real ordering model scoring
/// adjacent-slide tag transitions.
pub fn select_slides(slides: &[Slide]) -> SlideshowReport {
    if slides.is_empty() {
        return SlideshowReport {
            status: SolutionStatus::Optimal,
            selected: Vec::new(),
        };
    }

    let mut problem = MipProblem::new();
    for i in 0..slides.len() {
        problem.push_binary(format!("s{i}"));
    }
    problem.set_objective(vec![1.0; slides.len()], true);
    for i in 0..slides.len() {
        let mut coefficients = vec![0.0; slides.len()];
        coefficients[i] = 1.0;
        problem.add_constraint(format!("s{i}_ub"), coefficients, ConstraintOp::Le, 1.0);
    }

    let solution = Solver::new().solve(&problem);
    match solution.status {
        SolutionStatus::Optimal => SlideshowReport {
            status: solution.status,
            selected: solution
                .values
                .iter()
                .enumerate()
                .filter(|&(_, &x)| x > 0.5)
                .map(|(i, _)| i)
                .collect(),
        },
        status => SlideshowReport {
            status,
            selected: Vec::new(),
        },
    }
}

/// Render the output file body: a count line, then one line per slide
/// with its photo id (or pair of ids, space separated).
pub fn render_output(slides: &[Slide]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", slides.len()));
    for slide in slides {
        match slide.layout {
            SlideLayout::Single(id) => out.push_str(&format!("{id}\n")),
            SlideLayout::Pair(a, b) => out.push_str(&format!("{a} {b}\n")),
        }
    }
    out
}

/// Process one collection file end to end: parse, assemble, select,
/// write. Returns the number of slides written.
pub fn solve_file(input: &Path, output: &Path) -> Result<usize, SlideshowError> {
    let source = fs::read_to_string(input).map_err(|e| SlideshowError::Io(e.to_string()))?;
    let photos = Parser::parse(&source)
        .map_err(|e| SlideshowError::Parse(input.display().to_string(), e.to_string()))?;

    let slides = assemble(photos);
    let report = select_slides(&slides);
    let chosen = report.selected_slides(&slides);

    fs::write(output, render_output(&chosen)).map_err(|e| SlideshowError::Io(e.to_string()))?;
    Ok(chosen.len())
}
