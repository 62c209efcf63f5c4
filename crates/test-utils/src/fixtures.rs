//! Common test fixtures for wms-kit tests.

use wms_common::ServiceConfig;

/// GetCapabilities documents.
pub mod capabilities {
    /// WMS 1.1.1 document with three sibling layers, one name repeated.
    ///
    /// Layers: `population`, `elevation`, `population`
    pub const WMS_111_SIBLINGS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE WMT_MS_Capabilities SYSTEM "http://schemas.opengis.net/wms/1.1.1/WMS_MS_Capabilities.dtd">
<WMT_MS_Capabilities version="1.1.1">
  <Service>
    <Name>OGC:WMS</Name>
    <Title>Demo service</Title>
  </Service>
  <Capability>
    <Request>
      <GetMap>
        <Format>image/png</Format>
      </GetMap>
    </Request>
    <Layer>
      <Name>population</Name>
      <Title>Population</Title>
      <SRS>EPSG:4326</SRS>
    </Layer>
    <Layer>
      <Name>elevation</Name>
      <Title>Elevation</Title>
    </Layer>
    <Layer>
      <Name>population</Name>
      <Title>Population (mirror)</Title>
    </Layer>
  </Capability>
</WMT_MS_Capabilities>
"#;

    /// WMS 1.3.0 document with the usual root layer, children, a style and a
    /// group layer.
    ///
    /// Flat scope: `kartdata`, `roads`, `default`, `water`, `buildings`
    /// Nested scope: `kartdata`, `roads`, `water`, `buildings`
    pub const WMS_130_NESTED: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0" xmlns="http://www.opengis.net/wms">
  <Service>
    <Name>WMS</Name>
    <Title>Topographic map</Title>
  </Service>
  <Capability>
    <Layer>
      <Name>kartdata</Name>
      <Title>Kartdata</Title>
      <CRS>EPSG:4326</CRS>
      <CRS>EPSG:900913</CRS>
      <Layer queryable="1">
        <Name>roads</Name>
        <Title>Roads</Title>
        <Style>
          <Name>default</Name>
          <Title>Default</Title>
        </Style>
      </Layer>
      <Layer>
        <Name>
          water
        </Name>
        <Title>Water</Title>
      </Layer>
      <Layer>
        <Title>Buildings group</Title>
        <Layer>
          <Name>buildings</Name>
          <Title>Buildings</Title>
        </Layer>
      </Layer>
    </Layer>
  </Capability>
</WMS_Capabilities>
"#;

    /// A name that follows a nested layer inside its parent.
    ///
    /// Flat scope: `inner`
    /// Nested scope: `inner`, `outer`
    pub const NAME_AFTER_NESTED_LAYER: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer>
      <Layer>
        <Name>inner</Name>
      </Layer>
      <Name>outer</Name>
    </Layer>
  </Capability>
</WMS_Capabilities>
"#;

    /// Names whose text arrives in several pieces.
    ///
    /// Layers: `hydrography`, `land & sea`
    pub const SPLIT_TEXT: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer><Name>hydro<!-- split -->graphy</Name></Layer>
    <Layer><Name><![CDATA[land & sea]]></Name></Layer>
  </Capability>
</WMS_Capabilities>
"#;

    /// Prefixed element names.
    ///
    /// Layers: `ns_layer`
    pub const NAMESPACED: &str = r#"<wms:WMS_Capabilities version="1.3.0" xmlns:wms="http://www.opengis.net/wms">
  <wms:Capability>
    <wms:Layer>
      <wms:Name>ns_layer</wms:Name>
    </wms:Layer>
  </wms:Capability>
</wms:WMS_Capabilities>
"#;

    /// Well-formed, but without any layers.
    pub const NO_LAYERS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<WMS_Capabilities version="1.3.0">
  <Service>
    <Name>WMS</Name>
    <Title>Empty</Title>
  </Service>
  <Capability/>
</WMS_Capabilities>
"#;

    /// `</Capability>` closes while `<Layer>` is still open.
    pub const MISMATCHED_END: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer>
      <Name>roads</Name>
  </Capability>
</WMS_Capabilities>
"#;

    /// Document cut off mid-stream.
    pub const TRUNCATED: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer>
      <Name>roads</Name>
    </Layer>
"#;

    /// An HTTP error page served as the capabilities body.
    pub const PLAIN_TEXT: &str = "Service Temporarily Unavailable";

    /// Nothing but the XML declaration and a comment.
    pub const NO_ROOT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!-- capabilities temporarily disabled -->
"#;

    /// A complete document followed by a second top-level element.
    pub const MULTIPLE_ROOTS: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer><Name>roads</Name></Layer>
  </Capability>
</WMS_Capabilities>
<WMS_Capabilities version="1.3.0"/>
"#;

    /// Text trailing the root element.
    pub const TRAILING_TEXT: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer><Name>roads</Name></Layer>
  </Capability>
</WMS_Capabilities>
trailing garbage
"#;

    /// ISO-8859-1 document with a non-ASCII layer name.
    ///
    /// Layers: `Fjøell`
    pub const LATIN1: &[u8] = b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>
<WMS_Capabilities version=\"1.3.0\">
  <Capability>
    <Layer><Name>Fj\xF8ell</Name></Layer>
  </Capability>
</WMS_Capabilities>
";

    /// The same Latin-1 bytes without an encoding declaration, so invalid UTF-8.
    pub const UNDECLARED_LATIN1: &[u8] = b"<WMS_Capabilities version=\"1.3.0\">
  <Capability>
    <Layer><Name>Fj\xF8ell</Name></Layer>
  </Capability>
</WMS_Capabilities>
";

    /// Undefined entity reference in a layer name.
    pub const UNKNOWN_ENTITY: &str = r#"<WMS_Capabilities version="1.3.0">
  <Capability>
    <Layer><Name>roads &bogus; rail</Name></Layer>
  </Capability>
</WMS_Capabilities>
"#;
}

/// Base URL used by [`service_config`].
pub const TEST_BASE_URL: &str = "https://x/wms";

/// WMS 1.3.0 / EPSG:4326 / 256px PNG configuration against [`TEST_BASE_URL`].
pub fn service_config() -> ServiceConfig {
    ServiceConfig {
        base_url: TEST_BASE_URL.to_string(),
        wms_version: "1.3.0".to_string(),
        epsg_code: "4326".to_string(),
        tile_size: 256,
        image_format: "image/png".to_string(),
        transparent: true,
    }
}

/// [`service_config`] with a different version and EPSG code.
pub fn service_config_with(wms_version: &str, epsg_code: &str) -> ServiceConfig {
    ServiceConfig {
        wms_version: wms_version.to_string(),
        epsg_code: epsg_code.to_string(),
        ..service_config()
    }
}
