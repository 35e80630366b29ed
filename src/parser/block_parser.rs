use crate::config::Config;
use crate::syntax::{SyntaxKind, SyntaxNode};
use rowan::GreenNodeBuilder;

mod abbreviation_definitions;
mod code_blocks;
mod headings;
mod paragraphs;
mod utils;

pub use abbreviation_definitions::{
    AbbrDefinitionMatch, emit_abbreviation_definition, try_parse_abbreviation_definition,
};

use abbreviation_definitions::try_parse_abbreviation_definition_line;
use code_blocks::try_parse_fenced_code_block;
use headings::{emit_atx_heading, try_parse_atx_heading};
use paragraphs::try_parse_paragraph;
use utils::{is_blank, split_line_ending};

pub struct BlockParser<'a> {
    lines: Vec<&'a str>,
    pos: usize,
    builder: GreenNodeBuilder<'static>,
    config: &'a Config,
}

impl<'a> BlockParser<'a> {
    pub fn new(input: &'a str, config: &'a Config) -> Self {
        let lines: Vec<&str> = input.split_inclusive('\n').collect();
        Self {
            lines,
            pos: 0,
            builder: GreenNodeBuilder::new(),
            config,
        }
    }

    fn try_parse_blank_line(&mut self) -> bool {
        let line = self.lines[self.pos];
        if !is_blank(line) {
            return false;
        }

        let (content, newline) = split_line_ending(line);
        self.builder.start_node(SyntaxKind::BLANK_LINE.into());
        if !content.is_empty() {
            self.builder.token(SyntaxKind::BLANK_LINE.into(), content);
        }
        if !newline.is_empty() {
            self.builder.token(SyntaxKind::NEWLINE.into(), newline);
        }
        self.builder.finish_node();
        self.pos += 1;

        log::trace!("Parsed blank line at position {}", self.pos);
        true
    }

    fn try_parse_atx_heading(&mut self) -> bool {
        let line = self.lines[self.pos];
        let (content, _) = split_line_ending(line);
        if let Some(level) = try_parse_atx_heading(content) {
            log::debug!("Parsed ATX heading (level {}) at line {}", level, self.pos + 1);
            emit_atx_heading(&mut self.builder, line, level);
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn try_parse_fenced_code_block(&mut self) -> bool {
        if !self.config.extensions.fenced_code_blocks {
            return false;
        }
        if let Some(new_pos) = try_parse_fenced_code_block(&self.lines, self.pos, &mut self.builder)
        {
            self.pos = new_pos;
            true
        } else {
            false
        }
    }

    fn try_parse_abbreviation_definition(&mut self) -> bool {
        if !self.config.extensions.abbreviations {
            return false;
        }
        if let Some(new_pos) =
            try_parse_abbreviation_definition_line(&self.lines, self.pos, &mut self.builder)
        {
            self.pos = new_pos;
            true
        } else {
            false
        }
    }

    fn try_parse_paragraph(&mut self) -> bool {
        if let Some(new_pos) = try_parse_paragraph(
            &self.lines,
            self.pos,
            &mut self.builder,
            self.config.extensions.fenced_code_blocks,
        ) {
            self.pos = new_pos;
            true
        } else {
            false
        }
    }

    pub fn parse(mut self) -> SyntaxNode {
        self.builder.start_node(SyntaxKind::DOCUMENT.into());

        log::debug!("Starting block parse of {} lines", self.lines.len());

        while self.pos < self.lines.len() {
            log::trace!("Parsing line {}: {:?}", self.pos + 1, self.lines[self.pos]);

            if self.try_parse_blank_line() {
                continue;
            }

            if self.try_parse_atx_heading() {
                continue;
            }

            if self.try_parse_fenced_code_block() {
                continue;
            }

            // Must come before paragraphs: a failed definition falls back to paragraph text
            if self.try_parse_abbreviation_definition() {
                continue;
            }

            if self.try_parse_paragraph() {
                continue;
            }

            // Only blank lines fail every parser above, and those are handled first
            self.pos += 1;
        }

        self.builder.finish_node(); // DOCUMENT

        SyntaxNode::new_root(self.builder.finish())
    }
}

#[cfg(test)]
mod tests {
    mod abbreviations;
    mod helpers;
    mod losslessness;
}
