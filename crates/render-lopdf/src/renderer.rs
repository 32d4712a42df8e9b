use crate::content::PageContext;
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};
use obra_layout::{DecodedImage, FontFace, PagePlan};
use obra_render_core::utils::to_win_ansi;
use obra_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

const PRODUCER: &str = "obra";

/// An in-memory PDF renderer using the `lopdf` library.
/// It builds the document's object graph and writes it out in [`DocumentRenderer::finish`].
pub struct LopdfRenderer<W: Write> {
    writer: Option<W>,
    document: Document,
    pages_id: ObjectId,
    resources_id: ObjectId,
    page_ids: Vec<ObjectId>,
    fonts: Dictionary,
    font_names: HashMap<FontFace, String>,
    xobjects: Dictionary,
    image_names: HashMap<String, String>,
    info: DocumentInfo,
}

impl<W: Write> LopdfRenderer<W> {
    pub fn new() -> Self {
        let mut document = Document::with_version("1.5");
        let pages_id = document.new_object_id();
        let resources_id = document.new_object_id();

        let font_names = FontFace::ALL
            .iter()
            .enumerate()
            .map(|(i, face)| (*face, format!("F{}", i + 1)))
            .collect();

        Self {
            writer: None,
            document,
            pages_id,
            resources_id,
            page_ids: Vec::new(),
            fonts: Dictionary::new(),
            font_names,
            xobjects: Dictionary::new(),
            image_names: HashMap::new(),
            info: DocumentInfo::default(),
        }
    }

    fn add_image(&mut self, image: &DecodedImage) -> Result<ObjectId, RenderError> {
        let smask_id = match &image.alpha {
            Some(alpha) => {
                let mut smask = Stream::new(
                    dictionary! {
                        "Type" => "XObject",
                        "Subtype" => "Image",
                        "Width" => image.width as i64,
                        "Height" => image.height as i64,
                        "ColorSpace" => "DeviceGray",
                        "BitsPerComponent" => 8,
                    },
                    alpha.clone(),
                );
                smask.compress()?;
                Some(self.document.add_object(smask))
            }
            None => None,
        };

        let mut dict = dictionary! {
            "Type" => "XObject",
            "Subtype" => "Image",
            "Width" => image.width as i64,
            "Height" => image.height as i64,
            "ColorSpace" => "DeviceRGB",
            "BitsPerComponent" => 8,
        };
        if let Some(id) = smask_id {
            dict.set("SMask", id);
        }
        let mut stream = Stream::new(dict, image.rgb.clone());
        stream.compress()?;
        Ok(self.document.add_object(stream))
    }
}

impl<W: Write> Default for LopdfRenderer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> DocumentRenderer<W> for LopdfRenderer<W> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError> {
        for face in FontFace::ALL {
            let font_id = self.document.add_object(dictionary! {
                "Type" => "Font",
                "Subtype" => "Type1",
                "BaseFont" => face.postscript_name(),
                "Encoding" => "WinAnsiEncoding",
            });
            if let Some(name) = self.font_names.get(&face) {
                self.fonts.set(name.as_bytes(), font_id);
            }
        }
        self.info = info.clone();
        self.writer = Some(writer);
        Ok(())
    }

    fn add_resources(
        &mut self,
        resources: &HashMap<String, Arc<DecodedImage>>,
    ) -> Result<(), RenderError> {
        let mut keys: Vec<&String> = resources.keys().collect();
        keys.sort();
        for key in keys {
            if self.image_names.contains_key(key) {
                continue;
            }
            let image = &resources[key];
            let image_id = self.add_image(image)?;
            let name = format!("Im{}", self.image_names.len() + 1);
            log::debug!(
                "Registered image '{}' as /{} ({}x{})",
                key,
                name,
                image.width,
                image.height
            );
            self.xobjects.set(name.as_bytes(), image_id);
            self.image_names.insert(key.clone(), name);
        }
        Ok(())
    }

    fn render_page(&mut self, page: &PagePlan) -> Result<(), RenderError> {
        if self.writer.is_none() {
            return Err(RenderError::Other("Document not started".into()));
        }
        let size = page.size();
        let mut page_ctx = PageContext::new(size.height, &self.font_names, &self.image_names);
        for element in page.elements() {
            page_ctx.draw_element(element)?;
        }
        let content = page_ctx.finish();

        let mut content_stream = Stream::new(dictionary! {}, content.encode()?);
        content_stream.compress()?;
        let content_id = self.document.add_object(content_stream);

        let page_dict = dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), size.width.into(), size.height.into()],
            "Contents" => content_id,
            "Resources" => self.resources_id,
        };
        let page_id = self.document.add_object(page_dict);
        self.page_ids.push(page_id);
        log::debug!("Rendered page {} ({} elements)", page.number(), page.elements().len());
        Ok(())
    }

    fn finish(self: Box<Self>) -> Result<W, RenderError> {
        let mut renderer = *self;
        let mut writer = renderer
            .writer
            .take()
            .ok_or_else(|| RenderError::Other("Document not started or already finished".into()))?;

        let mut resources = dictionary! { "Font" => renderer.fonts };
        if !renderer.xobjects.is_empty() {
            resources.set("XObject", renderer.xobjects);
        }
        renderer
            .document
            .objects
            .insert(renderer.resources_id, Object::Dictionary(resources));

        let kids: Vec<Object> = renderer.page_ids.iter().map(|id| Object::from(*id)).collect();
        let pages_dict = dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => renderer.page_ids.len() as i64,
        };
        renderer
            .document
            .objects
            .insert(renderer.pages_id, Object::Dictionary(pages_dict));

        let catalog_id = renderer.document.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => renderer.pages_id,
        });
        renderer.document.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Title" => Object::String(to_win_ansi(&renderer.info.title), StringFormat::Literal),
            "Producer" => Object::string_literal(PRODUCER),
        };
        if let Some(author) = &renderer.info.author {
            info.set("Author", Object::String(to_win_ansi(author), StringFormat::Literal));
        }
        let info_id = renderer.document.add_object(info);
        renderer.document.trailer.set("Info", info_id);

        renderer.document.save_to(&mut writer)?;
        log::info!("Wrote PDF with {} page(s)", renderer.page_ids.len());
        Ok(writer)
    }
}
