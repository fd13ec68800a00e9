//! SOS 1.0.0 XML Request Builder
//!
//! Writes DescribeSensor and RegisterSensor documents with quick-xml.
//! Networks are registered as a SensorML `System` whose components are the
//! member stations, each an inline `System` of its own listing its platform,
//! feature of interest, position, observed phenomena and sensors.

use std::io::Cursor;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::domain::gateways::SosRequestBuilder;
use crate::domain::models::identifiers::{DerivedIdentifiers, IdentifierDeriver, NetworkId};
use crate::domain::models::network::{
    NetworkDescription, SensorDescription, SourceReference, StationDescription,
};
use crate::domain::models::publisher::PublisherInfo;
use crate::shared::errors::BuilderError;

const SOS_NS: &str = "http://www.opengis.net/sos/1.0";
const SML_NS: &str = "http://www.opengis.net/sensorML/1.0.1";
const SWE_NS: &str = "http://www.opengis.net/swe/1.0.1";
const GML_NS: &str = "http://www.opengis.net/gml";
const OM_NS: &str = "http://www.opengis.net/om/1.0";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const SENSOR_ML_FORMAT: &str = "text/xml;subtype=\"sensorML/1.0.1\"";
const EPSG_4326: &str = "http://www.opengis.net/def/crs/EPSG/0/4326";
const IOOS_DEFINITION: &str = "http://mmisw.org/ont/ioos/definition";
const CF_PARAMETER: &str = "http://mmisw.org/ont/cf/parameter";

/// quick-xml backed SosRequestBuilder
#[derive(Debug, Clone, Copy, Default)]
pub struct XmlRequestBuilder;

impl XmlRequestBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SosRequestBuilder for XmlRequestBuilder {
    fn describe_sensor(&self, procedure_id: &NetworkId) -> Result<String, BuilderError> {
        let mut doc = XmlDocument::new()?;
        doc.start(
            "DescribeSensor",
            &[
                ("xmlns", SOS_NS),
                ("service", "SOS"),
                ("version", "1.0.0"),
                ("outputFormat", SENSOR_ML_FORMAT),
            ],
        )?;
        doc.text_element("procedure", &[], procedure_id.as_str())?;
        doc.end("DescribeSensor")?;
        doc.finish()
    }

    fn register_network(
        &self,
        network: &NetworkDescription,
        identifiers: &DerivedIdentifiers,
        deriver: &IdentifierDeriver,
        publisher: &PublisherInfo,
    ) -> Result<String, BuilderError> {
        if network.long_name().trim().is_empty() {
            return Err(BuilderError::Invalid(format!(
                "network {} has no long name",
                identifiers.network_id
            )));
        }

        let mut doc = XmlDocument::new()?;
        doc.start(
            "sos:RegisterSensor",
            &[
                ("xmlns:sos", SOS_NS),
                ("xmlns:sml", SML_NS),
                ("xmlns:swe", SWE_NS),
                ("xmlns:gml", GML_NS),
                ("xmlns:om", OM_NS),
                ("xmlns:xlink", XLINK_NS),
                ("service", "SOS"),
                ("version", "1.0.0"),
            ],
        )?;

        doc.start("sos:SensorDescription", &[])?;
        doc.start("sml:SensorML", &[("version", "1.0.1")])?;
        doc.start("sml:member", &[])?;
        doc.start("sml:System", &[])?;

        doc.text_element("gml:description", &[], network.description())?;
        doc.text_element("gml:name", &[], identifiers.network_id.as_str())?;
        write_bounding_box(&mut doc, network)?;
        write_identification(&mut doc, network, identifiers)?;
        let sector = network.source().operator_sector.as_str();
        if !sector.is_empty() {
            write_classification(&mut doc, &[("operatorSector", sector)])?;
        }
        write_contact(
            &mut doc,
            "publisher",
            &publisher.name,
            &publisher.country,
            &publisher.email,
            &publisher.web_address,
        )?;
        write_operator(&mut doc, network.source())?;

        doc.start("sml:components", &[])?;
        doc.start("sml:ComponentList", &[])?;
        for station in network.stations() {
            write_station(&mut doc, station, deriver)?;
        }
        doc.end("sml:ComponentList")?;
        doc.end("sml:components")?;

        doc.end("sml:System")?;
        doc.end("sml:member")?;
        doc.end("sml:SensorML")?;
        doc.end("sos:SensorDescription")?;

        // Networks carry no observations; the template only satisfies the schema
        doc.start("sos:ObservationTemplate", &[])?;
        doc.start("om:Observation", &[])?;
        for element in [
            "om:samplingTime",
            "om:procedure",
            "om:observedProperty",
            "om:featureOfInterest",
            "om:result",
        ] {
            doc.empty(element, &[])?;
        }
        doc.end("om:Observation")?;
        doc.end("sos:ObservationTemplate")?;

        doc.end("sos:RegisterSensor")?;
        doc.finish()
    }
}

fn write_bounding_box(
    doc: &mut XmlDocument,
    network: &NetworkDescription,
) -> Result<(), BuilderError> {
    let Some((lower, upper)) = network.bounding_box() else {
        return Ok(());
    };

    doc.start("gml:boundedBy", &[])?;
    doc.start("gml:Envelope", &[("srsName", EPSG_4326)])?;
    doc.text_element(
        "gml:lowerCorner",
        &[],
        &format!("{} {}", lower.latitude, lower.longitude),
    )?;
    doc.text_element(
        "gml:upperCorner",
        &[],
        &format!("{} {}", upper.latitude, upper.longitude),
    )?;
    doc.end("gml:Envelope")?;
    doc.end("gml:boundedBy")
}

fn write_identification(
    doc: &mut XmlDocument,
    network: &NetworkDescription,
    identifiers: &DerivedIdentifiers,
) -> Result<(), BuilderError> {
    let mut entries = vec![
        ("networkID", identifiers.network_id.as_str()),
        ("longName", network.long_name()),
    ];
    if !network.short_name().is_empty() {
        entries.push(("shortName", network.short_name()));
    }

    write_terms(
        doc,
        "sml:identification",
        "sml:IdentifierList",
        "sml:identifier",
        &entries,
    )
}

fn write_station(
    doc: &mut XmlDocument,
    station: &StationDescription,
    deriver: &IdentifierDeriver,
) -> Result<(), BuilderError> {
    let station_id = deriver.station_id(station);

    doc.start("sml:component", &[("name", station.name.as_str())])?;
    doc.start("sml:System", &[])?;
    if !station.description.is_empty() {
        doc.text_element("gml:description", &[], &station.description)?;
    }
    doc.text_element("gml:name", &[], &station_id)?;

    write_terms(
        doc,
        "sml:identification",
        "sml:IdentifierList",
        "sml:identifier",
        &[("stationID", station_id.as_str()), ("longName", station.name.as_str())],
    )?;
    if let Some(platform_type) = station.platform_type.as_deref() {
        write_classification(doc, &[("platformType", platform_type)])?;
    }

    doc.start("sml:capabilities", &[])?;
    doc.start("swe:SimpleDataRecord", &[])?;
    doc.start("swe:field", &[("name", "featureOfInterest")])?;
    doc.start("swe:Text", &[])?;
    doc.text_element("swe:value", &[], &station.feature_of_interest_name)?;
    doc.end("swe:Text")?;
    doc.end("swe:field")?;
    doc.start("swe:field", &[("name", "moving")])?;
    doc.start("swe:Boolean", &[])?;
    doc.text_element("swe:value", &[], if station.moving { "true" } else { "false" })?;
    doc.end("swe:Boolean")?;
    doc.end("swe:field")?;
    doc.end("swe:SimpleDataRecord")?;
    doc.end("sml:capabilities")?;

    doc.start("sml:location", &[])?;
    doc.start("gml:Point", &[("srsName", EPSG_4326)])?;
    doc.text_element(
        "gml:pos",
        &[],
        &format!("{} {}", station.location.latitude, station.location.longitude),
    )?;
    doc.end("gml:Point")?;
    doc.end("sml:location")?;

    let mut phenomena: Vec<&str> = Vec::new();
    for phenomenon in station.sensors.iter().flat_map(|s| s.phenomena.iter()) {
        if !phenomena.contains(&phenomenon.as_str()) {
            phenomena.push(phenomenon);
        }
    }
    write_outputs(doc, &phenomena)?;

    if !station.sensors.is_empty() {
        doc.start("sml:components", &[])?;
        doc.start("sml:ComponentList", &[])?;
        for sensor in &station.sensors {
            write_sensor(doc, station, sensor, deriver)?;
        }
        doc.end("sml:ComponentList")?;
        doc.end("sml:components")?;
    }

    doc.end("sml:System")?;
    doc.end("sml:component")
}

fn write_sensor(
    doc: &mut XmlDocument,
    station: &StationDescription,
    sensor: &SensorDescription,
    deriver: &IdentifierDeriver,
) -> Result<(), BuilderError> {
    doc.start("sml:component", &[("name", sensor.id.as_str())])?;
    doc.start("sml:System", &[])?;
    if !sensor.description.is_empty() {
        doc.text_element("gml:description", &[], &sensor.description)?;
    }
    doc.text_element("gml:name", &[], &deriver.sensor_id(station, sensor))?;
    let phenomena: Vec<&str> = sensor.phenomena.iter().map(String::as_str).collect();
    write_outputs(doc, &phenomena)?;
    doc.end("sml:System")?;
    doc.end("sml:component")
}

fn write_outputs(doc: &mut XmlDocument, phenomena: &[&str]) -> Result<(), BuilderError> {
    if phenomena.is_empty() {
        return Ok(());
    }

    doc.start("sml:outputs", &[])?;
    doc.start("sml:OutputList", &[])?;
    for &phenomenon in phenomena {
        let definition = phenomenon_definition(phenomenon);
        doc.start("sml:output", &[("name", phenomenon_name(phenomenon))])?;
        doc.empty("swe:Quantity", &[("definition", definition.as_str())])?;
        doc.end("sml:output")?;
    }
    doc.end("sml:OutputList")?;
    doc.end("sml:outputs")
}

/// Plain names are read as CF standard names
fn phenomenon_definition(phenomenon: &str) -> String {
    if phenomenon.contains(':') {
        phenomenon.to_string()
    } else {
        format!("{CF_PARAMETER}/{phenomenon}")
    }
}

fn phenomenon_name(phenomenon: &str) -> &str {
    phenomenon
        .rsplit(['/', ':', '#'])
        .find(|segment| !segment.is_empty())
        .unwrap_or(phenomenon)
}

fn write_classification(
    doc: &mut XmlDocument,
    entries: &[(&str, &str)],
) -> Result<(), BuilderError> {
    write_terms(
        doc,
        "sml:classification",
        "sml:ClassifierList",
        "sml:classifier",
        entries,
    )
}

fn write_terms(
    doc: &mut XmlDocument,
    section: &str,
    list: &str,
    item: &str,
    entries: &[(&str, &str)],
) -> Result<(), BuilderError> {
    doc.start(section, &[])?;
    doc.start(list, &[])?;
    for &(name, value) in entries {
        let definition = format!("{IOOS_DEFINITION}/{name}");
        doc.start(item, &[("name", name)])?;
        doc.start("sml:Term", &[("definition", definition.as_str())])?;
        doc.text_element("sml:value", &[], value)?;
        doc.end("sml:Term")?;
        doc.end(item)?;
    }
    doc.end(list)?;
    doc.end(section)
}

fn write_operator(doc: &mut XmlDocument, source: &SourceReference) -> Result<(), BuilderError> {
    if source.name.is_empty() {
        return Ok(());
    }
    write_contact(
        doc,
        "operator",
        &source.name,
        &source.country,
        &source.email,
        &source.web_address,
    )
}

fn write_contact(
    doc: &mut XmlDocument,
    role: &str,
    organization: &str,
    country: &str,
    email: &str,
    web_address: &str,
) -> Result<(), BuilderError> {
    let role = format!("{IOOS_DEFINITION}/{role}");
    doc.start("sml:contact", &[("xlink:role", role.as_str())])?;
    doc.start("sml:ResponsibleParty", &[])?;
    doc.text_element("sml:organizationName", &[], organization)?;
    doc.start("sml:contactInfo", &[])?;
    doc.start("sml:address", &[])?;
    doc.text_element("sml:country", &[], country)?;
    doc.text_element("sml:electronicMailAddress", &[], email)?;
    doc.end("sml:address")?;
    if !web_address.is_empty() {
        doc.empty("sml:onlineResource", &[("xlink:href", web_address)])?;
    }
    doc.end("sml:contactInfo")?;
    doc.end("sml:ResponsibleParty")?;
    doc.end("sml:contact")
}

/// Thin wrapper over an indenting quick-xml writer
struct XmlDocument {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlDocument {
    fn new() -> Result<Self, BuilderError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        Ok(Self { writer })
    }

    fn start(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), BuilderError> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Start(element))?;
        Ok(())
    }

    fn end(&mut self, name: &str) -> Result<(), BuilderError> {
        self.writer.write_event(Event::End(BytesEnd::new(name)))?;
        Ok(())
    }

    fn empty(&mut self, name: &str, attributes: &[(&str, &str)]) -> Result<(), BuilderError> {
        let element = BytesStart::new(name).with_attributes(attributes.iter().copied());
        self.writer.write_event(Event::Empty(element))?;
        Ok(())
    }

    fn text_element(
        &mut self,
        name: &str,
        attributes: &[(&str, &str)],
        text: &str,
    ) -> Result<(), BuilderError> {
        self.start(name, attributes)?;
        self.writer.write_event(Event::Text(BytesText::new(text)))?;
        self.end(name)
    }

    fn finish(self) -> Result<String, BuilderError> {
        Ok(String::from_utf8(self.writer.into_inner().into_inner())?)
    }
}
