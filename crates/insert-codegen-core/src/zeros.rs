//! Empty-subtree constants for a BN254 Poseidon Merkle tree.
//!
//! `ZEROES[i]` is the root of an all-empty subtree of height `i`, in decimal.
//! The generated code uses it as the right sibling whenever the insertion path
//! turns left at level `i`.

use crate::error::{CodegenError, Result};

/// Default number of levels generated.
pub const DEFAULT_DEPTH: usize = 20;

/// Empty-subtree values for levels `0..=20`. The last entry is the root of an
/// empty depth-20 tree and is not consumed when generating 20 levels.
pub const ZEROES: [&str; 21] = [
    "543544072303548185257517071258879077999438229338741863745347926248040160894",
    "5263148031615500517773789998166832002359358478815380373385457941076984476107",
    "17956485954079679132773811758681578949163794793418771629775186921851074473020",
    "12818849578198618706853641503807770441784379819766699750158640467167373686827",
    "20855805136626712543492304455032428762867320990141515473916248306878494117308",
    "16078145596845420873218387454438458413474087448530358305197693667765135117",
    "21469358837161435717475425023508741936366411081678940161225564928734007400175",
    "97392844013092531948986239638340052193563694412037219481774368684748869683",
    "9815574307005671302652737758332422327334048281128864225462159121130705840521",
    "7087204700527144239556873464136052126786766979088398104134271794395334453517",
    "10181090640042689059947552705763203436486859531084608903098065737516252860965",
    "18768849884748869821279983937428267667824021795115145745181803419204387232793",
    "2933336925830545942990247205542297128021746154492853303202253775340852058090",
    "19969264030889959278249843814460631197595484808175492092586113505583667929727",
    "20630468938722375422373209141732067356319655406689772991063986092557143438884",
    "16112017084498001096426326752234891940073685446685262588324357827862522787584",
    "5014107601768362368954905654771638641173580301154118547630986651087486382582",
    "19913447121430317358013346685585730169311308417727954536999999362867231935974",
    "5383269053000864513406337829703884940333204026496599059703565359684796208512",
    "13643259613994876902857690028538868307758819349041069235229132599319944746418",
    "21581843949009751067133004474045855475316029363599471302179162475240986081250",
];

/// Owned, ordered list of per-level constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantTable {
    values: Vec<String>,
}

impl ConstantTable {
    pub fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// The embedded Poseidon table.
    pub fn poseidon() -> Self {
        Self::new(ZEROES.iter().map(|z| z.to_string()).collect())
    }

    /// Constant for `level`, or [`CodegenError::MissingConstant`].
    pub fn get(&self, level: usize) -> Result<&str> {
        self.values
            .get(level)
            .map(String::as_str)
            .ok_or(CodegenError::MissingConstant {
                index: level,
                len: self.values.len(),
            })
    }

    /// Fail unless the table covers levels `0..depth`.
    pub fn ensure_depth(&self, depth: usize) -> Result<()> {
        if depth > self.values.len() {
            return Err(CodegenError::MissingConstant {
                index: self.values.len(),
                len: self.values.len(),
            });
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

impl Default for ConstantTable {
    fn default() -> Self {
        Self::poseidon()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_default_depth() {
        let table = ConstantTable::poseidon();
        assert!(table.len() > DEFAULT_DEPTH);
        assert!(table.ensure_depth(DEFAULT_DEPTH).is_ok());
    }

    #[test]
    fn test_constants_are_decimal() {
        for z in ZEROES {
            assert!(!z.is_empty());
            assert!(z.chars().all(|c| c.is_ascii_digit()), "{z}");
        }
    }

    #[test]
    fn test_get_out_of_range() {
        let table = ConstantTable::new(vec!["1".into(), "2".into()]);
        assert_eq!(table.get(1).unwrap(), "2");
        match table.get(2) {
            Err(CodegenError::MissingConstant { index, len }) => {
                assert_eq!(index, 2);
                assert_eq!(len, 2);
            }
            other => panic!("expected MissingConstant, got {other:?}"),
        }
    }

    #[test]
    fn test_ensure_depth_names_first_missing_level() {
        let table = ConstantTable::new(vec!["1".into()]);
        assert!(table.ensure_depth(0).is_ok());
        assert!(table.ensure_depth(1).is_ok());
        let err = table.ensure_depth(3).unwrap_err();
        assert_eq!(
            err.to_string(),
            "no empty-subtree constant for level 1 (table length 1)"
        );
    }
}
