use crate::config::IntegrationConfig;
use crate::report::{KeywordTally, ReferenceTally, RunReport};
use anyhow::{anyhow, Context, Result};
use iconclass_lexicon::{ConceptNames, KeywordBuckets, TaxonomySource};
use iconclass_notation::NotationDocument;

/// Keyword pass for every language, then one cross-reference pass over the notation file.
pub fn run(config: &IntegrationConfig) -> Result<RunReport> {
    config
        .validate()
        .map_err(|msg| anyhow!("Invalid integration config: {msg}"))?;
    config.ensure_output_dir()?;

    let sources = config
        .sources
        .iter()
        .map(|source| {
            TaxonomySource::load(&source.path)
                .with_context(|| format!("Cannot load taxonomy {}", source.path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut keywords = KeywordTally::default();
    for lang in &config.languages {
        integrate_keywords(config, lang, &sources, &mut keywords)?;
    }

    let references = integrate_references(config, &sources)?;

    Ok(RunReport::new(
        config.languages.clone(),
        keywords,
        references,
        config.output_notations.clone(),
    ))
}

fn integrate_keywords(
    config: &IntegrationConfig,
    lang: &str,
    sources: &[TaxonomySource],
    tally: &mut KeywordTally,
) -> Result<()> {
    let names = ConceptNames::for_language(&config.txt_dir, lang)
        .with_context(|| format!("Cannot load {lang} concept names"))?;
    let mut buckets = KeywordBuckets::load(&config.kw_dir, lang)
        .with_context(|| format!("Cannot load {lang} keyword files"))?;

    for source in sources {
        log::debug!(
            "Collecting {} keywords from {}",
            buckets.lang(),
            source.path().display()
        );
        for row in source.keyword_rows() {
            if names.name(&row.code).is_none() {
                log::warn!("{} not found in txt files.", row.code);
                tally.skipped += row.scent_list().count();
                continue;
            }
            for scent in row.scent_list() {
                buckets.add(&row.code, scent)?;
                tally.added += 1;
            }
        }
    }

    let written = buckets
        .write(&config.output_dir)
        .with_context(|| format!("Cannot write {lang} keyword files"))?;
    log::info!(
        "Wrote {} {} keyword files to {}",
        written.len(),
        buckets.lang(),
        config.output_dir.display()
    );
    Ok(())
}

fn integrate_references(
    config: &IntegrationConfig,
    sources: &[TaxonomySource],
) -> Result<ReferenceTally> {
    let mut doc = NotationDocument::load(&config.notations)?;
    let mut tally = ReferenceTally::default();

    for (source_config, source) in config.sources.iter().zip(sources) {
        for row in source.rows() {
            tally.apply(&mut doc, &row.code, &source_config.category)?;
        }
        log::debug!(
            "Applied {} references from {} to {}",
            source.rows().len(),
            source.path().display(),
            source_config.category
        );
    }

    doc.save(&config.output_notations)?;
    log::info!(
        "Inserted {} references, skipped {}",
        tally.inserted,
        tally.skipped
    );
    Ok(tally)
}
