//! SPARQL templates for the Geoconnex lookups.
//!
//! Caller text is spliced into the templates verbatim. Nothing is escaped, so a
//! river name or PID containing SPARQL syntax (quotes, `>`, `}`) changes the
//! query structure. The remote endpoint is the only validator.

/// Description fragment every dataset query filters on (case-insensitive regex).
pub const DATASET_DESCRIPTION_FILTER: &str = "temperature";

/// Row cap baked into the dataset query.
pub const DATASET_ROW_LIMIT: usize = 5;

const RIVER_PREFIXES: &str = "\
PREFIX hyf: <https://www.opengis.net/def/schema/hy_features/hyf/>
PREFIX gsp: <http://www.opengis.net/ont/geosparql#>
PREFIX schema: <https://schema.org/>";

const DATASET_PREFIXES: &str = "\
PREFIX schema: <https://schema.org/>
PREFIX gsp: <http://www.opengis.net/ont/geosparql#>
PREFIX hyf: <https://www.opengis.net/def/schema/hy_features/hyf/>";

/// Builds the query resolving a river name to mainstem flowpaths.
///
/// Matches any `hyf:HY_FlowPath` whose `schema:name` contains `river_name`,
/// ignoring case, and returns distinct `?mainstem ?name ?wkt` rows ordered by name.
#[must_use]
pub fn river_name_pid_query(river_name: &str) -> String {
    format!(
        r#"{RIVER_PREFIXES}

SELECT DISTINCT ?mainstem ?name ?wkt
WHERE {{
    BIND("{river_name}" AS ?searchString)

    ?mainstem a hyf:HY_FlowPath ;
              schema:name ?name ;
              gsp:hasGeometry/gsp:asWKT ?wkt .

    FILTER(CONTAINS(LCASE(STR(?name)), LCASE(STR(?searchString))))
}}
ORDER BY ?name
"#
    )
}

/// Builds the query listing monitoring datasets referenced to a mainstem PID.
///
/// The description filter and row limit are fixed; only the PID varies.
#[must_use]
pub fn datasets_for_pid_query(pid: &str) -> String {
    format!(
        r#"{DATASET_PREFIXES}

SELECT DISTINCT ?monitoringLocation ?siteName ?datasetDescription ?type ?url
                ?variableMeasured ?variableUnit ?measurementTechnique ?temporalCoverage
                ?distributionName ?distributionURL ?distributionFormat ?wkt
WHERE {{
    VALUES ?mainstem {{ <{pid}> }}

    ?monitoringLocation hyf:referencedPosition/hyf:HY_IndirectPosition/hyf:linearElement ?mainstem ;
                        schema:subjectOf ?item ;
                        hyf:HydroLocationType ?type ;
                        gsp:hasGeometry/gsp:asWKT ?wkt .

    ?item schema:name ?siteName ;
          schema:temporalCoverage ?temporalCoverage ;
          schema:url ?url ;
          schema:variableMeasured ?variableMeasured .

    ?variableMeasured schema:description ?datasetDescription ;
                      schema:name ?variableMeasuredName ;
                      schema:unitText ?variableUnit ;
                      schema:measurementTechnique ?measurementTechnique .

    OPTIONAL {{
        ?item schema:distribution ?distribution .
        ?distribution schema:name ?distributionName ;
                      schema:contentUrl ?distributionURL ;
                      schema:encodingFormat ?distributionFormat .
    }}

    FILTER(REGEX(?datasetDescription, "{DATASET_DESCRIPTION_FILTER}", "i"))
}}
ORDER BY ?siteName
LIMIT {DATASET_ROW_LIMIT}
"#
    )
}
