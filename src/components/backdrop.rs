use crate::config;

/// Diagonal hatch shown while (or instead of) the photo loads.
const HATCH_SVG: &str = "<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 1200 800'>\
<defs><pattern id='diagonals' patternUnits='userSpaceOnUse' width='4' height='4'>\
<path d='M0,4 l4,-4 M-1,1 l2,-2 M3,5 l2,-2' stroke='#333' stroke-width='0.5'/></pattern></defs>\
<rect width='100%' height='100%' fill='#222'/>\
<rect width='100%' height='100%' fill='url(#diagonals)' opacity='0.3'/></svg>";

pub fn hatch_data_uri() -> String {
    format!("data:image/svg+xml,{}", urlencoding::encode(HATCH_SVG))
}

/// Inline `background-image` for a darkened photo with the hatch fallback.
/// `shade` is the black overlay alpha.
pub fn shaded_background(image: &str, shade: f64, with_hatch: bool) -> String {
    let overlay = format!("linear-gradient(rgba(0,0,0,{0}), rgba(0,0,0,{0}))", shade);
    let photo = format!("url('{}')", config::asset_url(image));
    if with_hatch {
        format!("background-image: {}, {}, url(\"{}\");", overlay, photo, hatch_data_uri())
    } else {
        format!("background-image: {}, {};", overlay, photo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_has_no_raw_hash_or_quotes() {
        let uri = hatch_data_uri();
        assert!(uri.starts_with("data:image/svg+xml,"));
        let payload = &uri["data:image/svg+xml,".len()..];
        assert!(!payload.contains('#'));
        assert!(!payload.contains('"'));
        assert!(payload.contains("%23333"));
    }

    #[test]
    fn shaded_background_layers_overlay_first() {
        let css = shaded_background("discover.png", 0.6, true);
        let overlay = "linear-gradient(rgba(0,0,0,0.6), rgba(0,0,0,0.6))";
        assert!(css.starts_with(&format!("background-image: {}, url('", overlay)));
        assert!(css.contains("discover.png')"));
        assert!(css.ends_with("\");"));

        let plain = shaded_background("project1.png", 0.6, false);
        assert!(!plain.contains("data:image"));
    }
}
