//! Survey-database lookup URLs for a sky position.
//!
//! Each builder returns a search or cutout URL centered on the given
//! coordinates (degrees; radii in arcseconds). These land in subject
//! metadata so classifiers can pull up a galaxy in external archives
//! with one click.

/// SIMBAD coordinate search.
pub fn coords_to_simbad(ra: f64, dec: f64, search_radius: f64) -> String {
    format!(
        "http://simbad.u-strasbg.fr/simbad/sim-coo?Coord={}+%09{}&CooFrame=FK5&CooEpoch=2000&CooEqui=2000&CooDefinedFrames=none&Radius={}&Radius.unit=arcmin&submit=submit+query&CoordList=",
        ra, dec, search_radius
    )
}

/// DECaLS skyviewer viewpoint, default zoom.
pub fn coords_to_decals_skyviewer(ra: f64, dec: f64) -> String {
    format!(
        "http://www.legacysurvey.org/viewer?ra={}&dec={}&zoom=15&layer=decals-dr5",
        ra, dec
    )
}

/// SDSS navigate viewpoint, default zoom.
///
/// skyserver.sdss.org really does skip the www, but needs the explicit
/// http or the link keeps the referring site's root.
pub fn coords_to_sdss_navigate(ra: f64, dec: f64) -> String {
    format!(
        "http://skyserver.sdss.org/dr14/en/tools/chart/navi.aspx?ra={}&dec={}&scale=0.1&width=120&height=120&opt=",
        ra, dec
    )
}

/// NASA NED near-position search.
pub fn coords_to_ned(ra: f64, dec: f64, search_radius: f64) -> String {
    let ra_string = format!("{:3.8}d", ra);
    let dec_string = format!("{:3.8}d", dec);
    let search_radius_arcmin = search_radius / 60.0;
    format!(
        "https://ned.ipac.caltech.edu/cgi-bin/objsearch?search_type=Near+Position+Search&in_csys=Equatorial&in_equinox=J2000.0&lon={}&lat={}&radius={}&hconst=73&omegam=0.27&omegav=0.73&corr_z=1&z_constraint=Unconstrained&z_value1=&z_value2=&z_unit=z&ot_include=ANY&nmp_op=ANY&out_csys=Equatorial&out_equinox=J2000.0&obj_sort=Distance+to+search+center&of=pre_text&zv_breaker=30000.0&list_limit=5&img_stamp=YES",
        ra_string, dec_string, search_radius_arcmin
    )
}

/// VizieR search sorted by distance from the target.
pub fn coords_to_vizier(ra: f64, dec: f64, search_radius: f64) -> String {
    format!(
        "http://vizier.u-strasbg.fr/viz-bin/VizieR?&-c={},{}&-c.rs={}&-out.add=_r&-sort=_r",
        ra, dec, search_radius
    )
}

/// Pan-STARRS DR1 color cutout.
pub fn coords_to_panstarrs(ra: f64, dec: f64) -> String {
    format!(
        "http://ps1images.stsci.edu/cgi-bin/ps1cutouts?pos={}{:+.6}&filter=color&filter=g&filter=r&filter=i&filter=z&filter=y&filetypes=stack&auxiliary=data&size=240&output_size=0&verbose=0&autoscale=99.500000&catlist=",
        ra, dec
    )
}

/// Markdown link that the classification platform opens in a new tab.
pub fn wrap_url_in_new_tab_markdown(url: &str, display_text: &str) -> String {
    format!("[{}](+tab+{})", display_text, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simbad_url() {
        let url = coords_to_simbad(10.0, -5.5, 10.0);
        assert!(url.starts_with("http://simbad.u-strasbg.fr/simbad/sim-coo?Coord=10+%09-5.5"));
        assert!(url.contains("Radius=10"));
    }

    #[test]
    fn test_decals_url() {
        assert_eq!(
            coords_to_decals_skyviewer(147.2, 1.5),
            "http://www.legacysurvey.org/viewer?ra=147.2&dec=1.5&zoom=15&layer=decals-dr5"
        );
    }

    #[test]
    fn test_sdss_url() {
        let url = coords_to_sdss_navigate(147.2, 1.5);
        assert!(url.contains("ra=147.2&dec=1.5"));
        assert!(url.starts_with("http://skyserver.sdss.org/dr14"));
    }

    #[test]
    fn test_ned_url_formats_coordinates() {
        let url = coords_to_ned(147.2, 1.5, 10.0);
        assert!(url.contains("lon=147.20000000d"));
        assert!(url.contains("lat=1.50000000d"));
        // 10 arcsec -> arcmin
        assert!(url.contains("radius=0.16666666666666666"));
    }

    #[test]
    fn test_vizier_url() {
        let url = coords_to_vizier(147.2, 1.5, 10.0);
        assert!(url.contains("-c=147.2,1.5"));
        assert!(url.contains("-c.rs=10"));
    }

    #[test]
    fn test_panstarrs_url_signs_declination() {
        let north = coords_to_panstarrs(147.2, 1.5);
        assert!(north.contains("pos=147.2+1.500000"));

        let south = coords_to_panstarrs(147.2, -1.5);
        assert!(south.contains("pos=147.2-1.500000"));
    }

    #[test]
    fn test_new_tab_markdown() {
        assert_eq!(
            wrap_url_in_new_tab_markdown("http://example.com", "Click to view"),
            "[Click to view](+tab+http://example.com)"
        );
    }
}
